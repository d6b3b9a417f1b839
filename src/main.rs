#[tokio::main]
async fn main() {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    if let Err(err) = blockdeck::run().await {
        let fatal = blockdeck::FatalError::from(err);
        let payload = serde_json::json!({
            "error": {
                "code": fatal.code,
                "kind": fatal.kind,
                "message": fatal.message,
                "hint": fatal.hint,
                "retryable": fatal.retryable,
            }
        });
        eprintln!("{payload}");
        std::process::exit(fatal.code);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = review_queue::run().await {
        eprintln!("review-queue fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    handspace::run_with_config().await
}

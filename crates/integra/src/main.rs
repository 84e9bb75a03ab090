use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    integra_lib::main().await
}

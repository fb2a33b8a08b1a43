#[tokio::main]
async fn main() -> anyhow::Result<()> {
    formula_drill_backend::run().await
}

#[tokio::main]
async fn main() {
    hr_backend::run().await;
}

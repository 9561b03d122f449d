#[actix_web::main]
async fn main() -> std::io::Result<()> {
    zenga_film_server::run().await
}

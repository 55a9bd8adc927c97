#[actix_web::main]
async fn main() -> std::io::Result<()> {
    intax_audit_server::run().await
}

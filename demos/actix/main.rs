mod cors;
mod routes;

use actix_web::{App, HttpServer, web};
use cors::middleware::OcelotCors;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let app_state = cors::build_state();

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(OcelotCors::new(state.policy))
            .route("/api/courses", web::get().to(routes::list_courses))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}

//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;


use actix_web::web;

use crate::middleware::error::{json_error, path_error, query_error};

/// Configure all application routes.
///
/// The literal `/posts/search`, `/posts/slug/..` and `/posts/category/..`
/// resources are registered before the `/posts/{id}` wildcard.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .route("/", web::get().to(health::index))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(web::scope("/auth").route("/login", web::post().to(auth::login)))
                .service(
                    web::scope("/posts")
                        .service(
                            web::resource("")
                                .route(web::get().to(posts::list_posts))
                                .route(web::post().to(posts::create_post)),
                        )
                        .route("/search", web::get().to(posts::search_posts))
                        .route("/slug/{slug}", web::get().to(posts::get_post_by_slug))
                        .route(
                            "/category/{category}",
                            web::get().to(posts::posts_by_category),
                        )
                        .service(
                            web::resource("/{id}")
                                .route(web::get().to(posts::get_post))
                                .route(web::put().to(posts::update_post))
                                .route(web::delete().to(posts::delete_post)),
                        ),
                ),
        );
}

pub mod auth;
pub mod photos;
pub mod properties;
pub mod uploads;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Auth routes (signup/login are public; /me requires a valid JWT) ──
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(auth::signup))
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Property routes (all protected — require valid JWT, owner-scoped) ──
    cfg.service(
        web::scope("/properties")
            .route("", web::get().to(properties::get_properties))
            .route("", web::post().to(properties::create_property))
            .route("/{id}", web::get().to(properties::get_property))
            .route("/{id}", web::put().to(properties::update_property))
            .route("/{id}", web::delete().to(properties::delete_property))
            .route("/{id}/photos", web::get().to(photos::get_property_photos))
            .route("/{id}/photos", web::post().to(photos::add_property_photo)),
    );

    // ── Photo and upload routes (protected) ──
    cfg.service(web::resource("/photos/{id}").route(web::delete().to(photos::delete_photo)));
    cfg.service(web::resource("/upload").route(web::post().to(uploads::upload_image)));
}

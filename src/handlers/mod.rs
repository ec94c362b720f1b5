pub mod employee;
pub mod file;

use actix_web::web;

/// Registers every API route. Expects `web::Data<dyn EmployeeStore>` and
/// `web::Data<file::UploadDir>` to be present as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::post().to(employee::create_employee))
            .route(web::get().to(employee::get_employees)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::put().to(employee::update_employee))
            .route(web::delete().to(employee::delete_employee)),
    )
    .service(
        web::resource("/upload")
            .route(web::post().to(file::upload_file)),
    )
    .service(
        web::resource("/uploads/{filename}")
            .route(web::get().to(file::serve_upload)),
    );
}

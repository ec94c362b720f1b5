mod common;

use actix_web::{App, HttpServer};
use employee_directory::client::{Directory, FormField, FormMode, HttpDirectoryApi};
use employee_directory::handlers;
use employee_directory::store::MemoryEmployeeStore;

use common::{dir_entries, store_data, upload_data};

const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn fill(directory: &mut Directory<HttpDirectoryApi>, name: &str, employee_id: &str) {
    directory.set_field(FormField::Name, name);
    directory.set_field(FormField::Email, "someone@x.com");
    directory.set_field(FormField::Phone, "555-1234");
    directory.set_field(FormField::Position, "Tester");
    directory.set_field(FormField::EmployeeId, employee_id);
    directory.set_field(FormField::Gender, "female");
}

#[actix_web::test]
async fn directory_round_trips_through_a_live_server() {
    let uploads = tempfile::tempdir().expect("tempdir");
    let store = store_data(MemoryEmployeeStore::new());
    let upload_dir = upload_data(uploads.path());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(upload_dir.clone())
            .configure(handlers::configure)
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind ephemeral port");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let api = HttpDirectoryApi::new(&format!("http://{}", addr)).expect("base url");
    let mut directory = Directory::mount(api).await;
    assert!(directory.employees().is_empty());

    fill(&mut directory, "Jane Doe", "E1");
    directory.select_image("jane.png", PNG.to_vec()).await.expect("upload");
    let jane = directory.submit().await.expect("create jane");
    let image = jane.image.clone().expect("image path kept");
    assert!(image.starts_with("/uploads/") && image.ends_with(".png"));
    assert_eq!(dir_entries(uploads.path()).len(), 1);

    fill(&mut directory, "Bob Stone", "E2");
    let bob = directory.submit().await.expect("create bob");

    directory.begin_edit(jane.id).expect("jane is listed");
    directory.set_field(FormField::Position, "WebDev");
    directory.submit().await.expect("update jane");
    assert_eq!(directory.mode(), FormMode::Creating);

    directory.delete(bob.id).await.expect("delete bob");

    // A fresh view sees exactly what the server kept.
    let api = HttpDirectoryApi::new(&format!("http://{}/", addr)).expect("base url");
    let fresh = Directory::mount(api).await;
    assert_eq!(fresh.employees(), directory.employees());
    assert_eq!(fresh.employees().len(), 1);
    assert_eq!(fresh.employees()[0].position, "WebDev");
    assert_eq!(fresh.employees()[0].image.as_deref(), Some(image.as_str()));

    directory.set_search_term("JANE");
    directory.search().await.expect("search");
    assert_eq!(directory.visible().len(), 1);
    directory.reset_search().await.expect("reset");
    assert_eq!(directory.visible().len(), 1);

    // Deleting twice surfaces the server's 404 and keeps the list.
    assert!(directory.delete(bob.id).await.is_err());
    assert_eq!(directory.employees().len(), 1);

    handle.stop(true).await;
}

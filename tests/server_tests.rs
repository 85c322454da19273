use actix_web::{test, web, App};
use serde_json::Value;

use worklogs::excel::{write_xlsx, COLUMNAS_WORKLOG};
use worklogs::models::{Celda, Tabla};
use worklogs::server::{configure, AppState};
use worklogs::server_handlers::XLSX_MIME;
use worklogs::taxonomy::parse_taxonomy;

const BOUNDARY: &str = "----worklogs-test";

fn multipart(archivos: &[(&str, Vec<u8>)]) -> Vec<u8> {
    let mut body = Vec::new();
    for (nombre, bytes) in archivos {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, nombre, XLSX_MIME
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn post(uri: &str, archivos: &[(&str, Vec<u8>)]) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header(("Content-Type", format!("multipart/form-data; boundary={}", BOUNDARY)))
        .set_payload(multipart(archivos))
}

fn estado() -> web::Data<AppState> {
    let t = parse_taxonomy(r#"{"Soporte": ["error"], "Capacitación": ["curso"]}"#).unwrap();
    web::Data::new(AppState::with_taxonomy(t, 2))
}

fn worklogs() -> Vec<u8> {
    let mut t = Tabla::new(&COLUMNAS_WORKLOG);
    t.push(vec![
        Celda::texto("OPS-1"),
        Celda::texto("8h"),
        Celda::Numero(28800.0),
        Celda::texto("ana"),
        Celda::texto("2025-04-07 09:00:00"),
        Celda::texto("OPS"),
    ]);
    write_xlsx(&t, "Sheet1").unwrap()
}

fn tracking() -> Vec<u8> {
    let mut t = Tabla::new(&["Author", "Comment", "Issue Summary", "Time Spent"]);
    t.push(vec![Celda::texto("ana"), Celda::texto("curso de Rust"), Celda::texto("CAP-1"), Celda::texto("2h")]);
    t.push(vec![Celda::texto("beto"), Celda::texto("error en login"), Celda::texto("INC-9"), Celda::texto("1h")]);
    write_xlsx(&t, "Sheet1").unwrap()
}

#[actix_web::test]
async fn test_help() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let resp = test::call_service(&app, test::TestRequest::get().uri("/help").to_request()).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert!(body["endpoints"]["POST /estimaciones"].is_object());
}

#[actix_web::test]
async fn test_estimaciones_json() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let req = post("/estimaciones", &[("worklogs_2025-04-07_2025-04-11.xlsx", worklogs())]).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["reporte"]["authors"], serde_json::json!(["ana"]));
    assert_eq!(body["diarias"]["filas"].as_array().unwrap().len(), 5);
    assert_eq!(body["semanales"]["filas"][0][1], "W1");
}

#[actix_web::test]
async fn test_estimaciones_xlsx() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let req = post("/estimaciones?formato=xlsx", &[("worklogs_2025-04-07_2025-04-11.xlsx", worklogs())]).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(resp.headers().get("content-type").unwrap(), XLSX_MIME);
    let bytes = test::read_body(resp).await;
    // un .xlsx es un zip
    assert_eq!(&bytes[..2], b"PK");
}

#[actix_web::test]
async fn test_estimaciones_nombre_sin_fechas_es_400() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let resp = test::call_service(&app, post("/estimaciones", &[("export.xlsx", worklogs())]).to_request()).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("export.xlsx"));
}

#[actix_web::test]
async fn test_disponibilidad() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let req = post("/disponibilidad", &[("Tracking_Abril2025.xlsx", tracking())]).to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["autores"], serde_json::json!(["ana"]));
    assert_eq!(body["registros"]["filas"][0][3], "Abril 2025");
}

#[actix_web::test]
async fn test_estimaciones_rechaza_mas_de_un_archivo() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let archivos = [
        ("worklogs_2025-04-07_2025-04-11.xlsx", worklogs()),
        ("worklogs_2025-04-14_2025-04-18.xlsx", worklogs()),
    ];
    let resp = test::call_service(&app, post("/estimaciones", &archivos).to_request()).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("hasta 1 archivos"));
}

#[actix_web::test]
async fn test_archivo_demasiado_grande() {
    let t = parse_taxonomy(r#"{"Soporte": ["error"]}"#).unwrap();
    let estado = web::Data::new(AppState::with_taxonomy(t, 6).with_max_bytes(64));
    let app = test::init_service(App::new().app_data(estado).configure(configure)).await;
    let resp = test::call_service(&app, post("/gestion", &[("Tracking_Abril2025.xlsx", tracking())]).to_request()).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Tracking_Abril2025.xlsx"));
}

#[actix_web::test]
async fn test_disponibilidad_demasiados_archivos() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let archivos = [
        ("Tracking_Enero2025.xlsx", tracking()),
        ("Tracking_Febrero2025.xlsx", tracking()),
        ("Tracking_Marzo2025.xlsx", tracking()),
    ];
    let resp = test::call_service(&app, post("/disponibilidad", &archivos).to_request()).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("hasta 2 archivos"));
}

#[actix_web::test]
async fn test_gestion() {
    let app = test::init_service(App::new().app_data(estado()).configure(configure)).await;
    let resp = test::call_service(&app, post("/gestion", &[("Tracking_Abril2025.xlsx", tracking())]).to_request()).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    let columnas = body["clasificados"]["columnas"].as_array().unwrap();
    assert_eq!(columnas.last().unwrap(), "final_tag");
    assert_eq!(body["clasificados"]["filas"][0][4], "Capacitación");
    assert_eq!(body["clasificados"]["filas"][1][4], "Soporte");
}

#[actix_web::test]
async fn test_gestion_sin_taxonomia_es_500() {
    let estado = web::Data::new(AppState {
        taxonomia: Err("no existe".to_string()),
        max_archivos: 6,
        max_bytes: 1024 * 1024,
    });
    let app = test::init_service(App::new().app_data(estado).configure(configure)).await;
    let resp = test::call_service(&app, post("/gestion", &[("Tracking_Abril2025.xlsx", tracking())]).to_request()).await;
    assert_eq!(resp.status(), 500);
}

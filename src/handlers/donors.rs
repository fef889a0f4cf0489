//! # Donor HTTP Handlers
//!
//! 헌혈자 등록과 검색 페이지를 처리합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/` | 등록 페이지로 리다이렉트 |
//! | `GET` | `/register` | 등록 폼 |
//! | `POST` | `/register` | 등록 후 검색 페이지로 리다이렉트 |
//! | `GET` | `/find` | 검색 폼과 결과 |

use actix_web::{get, post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::dto::donors::{FindDonorsQuery, RegisterDonorForm};
use crate::services::donors::DonorService;
use crate::views::{render_find_page, render_register_page, FindPage};
use super::{failure_location, html, redirect};

#[get("/")]
pub async fn index() -> HttpResponse {
    redirect("/register")
}

#[get("/register")]
pub async fn register_page() -> HttpResponse {
    html(render_register_page())
}

/// 헌혈자 등록
///
/// 폼 값은 검증 없이 그대로 저장됩니다.
///
/// # Errors
///
/// * `AppError::DatabaseError` - 500, 본문 `DB error`
#[post("/register")]
pub async fn register_donor(
    service: web::Data<DonorService>,
    form: web::Form<RegisterDonorForm>,
) -> Result<HttpResponse, AppError> {
    service.register(form.into_inner()).await?;
    Ok(redirect("/find"))
}

/// 헌혈자 검색
///
/// `blood_group`과 `location`이 모두 있을 때만 검색하고, 아니면 빈 상태 페이지를 보여줍니다.
/// 검색 중 저장소 에러가 나면 `db_error` 배너가 있는 검색 페이지로 보냅니다.
#[get("/find")]
pub async fn find_donors(
    service: web::Data<DonorService>,
    query: web::Query<FindDonorsQuery>,
) -> HttpResponse {
    let query = query.into_inner();

    let donors = match service.search(&query).await {
        Ok(donors) => donors,
        Err(e) => return redirect(&failure_location(&e.error_code())),
    };

    html(render_find_page(&FindPage {
        blood_group: query.blood_group.as_deref(),
        location: query.location.as_deref(),
        donors: donors.as_deref(),
        sent: query.sent.as_deref(),
        error: query.error.as_deref(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use crate::routes::configure_all_routes;
    use crate::test_support::{app_data, InMemoryDonorRepository, RecordingMailTransport};

    async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn test_root_redirects_to_register() {
        let (donors, contact) = app_data(
            Arc::new(InMemoryDonorRepository::new()),
            Arc::new(RecordingMailTransport::new()),
        );
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/register");
    }

    #[actix_web::test]
    async fn test_register_then_find() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        let (donors, contact) = app_data(repo.clone(), Arc::new(RecordingMailTransport::new()));
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([
                ("name", "Minho Lee"),
                ("email", "minho@example.com"),
                ("phone", "010-2222-3333"),
                ("blood_group", "O+"),
                ("location", "Seoul Mapo"),
            ])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/find");
        assert_eq!(repo.all().len(), 1);

        let req = test::TestRequest::get()
            .uri("/find?blood_group=O%2B&location=Mapo")
            .to_request();
        let body = body_text(test::call_service(&app, req).await).await;

        assert!(body.contains("Minho Lee"));
        assert!(body.contains(r#"name="donor_id" value="1""#));
    }

    #[actix_web::test]
    async fn test_register_accepts_empty_fields() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        let (donors, contact) = app_data(repo.clone(), Arc::new(RecordingMailTransport::new()));
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("name", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(repo.all()[0].email, "");
    }

    #[actix_web::test]
    async fn test_register_storage_error_is_500() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        repo.fail_with("Duplicate entry");
        let (donors, contact) = app_data(repo, Arc::new(RecordingMailTransport::new()));
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/register")
            .set_form([("name", "Dana"), ("blood_group", "A+")])
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(resp).await, "DB error");
    }

    #[actix_web::test]
    async fn test_partial_query_renders_empty_state() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        let (donors, contact) = app_data(repo.clone(), Arc::new(RecordingMailTransport::new()));
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/find?blood_group=B%2B").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let partial = body_text(resp).await;

        let req = test::TestRequest::get()
            .uri("/find?blood_group=B%2B&location=Nowhere")
            .to_request();
        let zero = body_text(test::call_service(&app, req).await).await;

        assert!(partial.contains("Choose a blood group"));
        assert!(zero.contains("No donors found"));
        assert_eq!(repo.search_calls(), 1);
    }

    #[actix_web::test]
    async fn test_search_storage_error_redirects_with_db_error() {
        let repo = Arc::new(InMemoryDonorRepository::new());
        repo.fail_with("Lost connection");
        let (donors, contact) = app_data(repo, Arc::new(RecordingMailTransport::new()));
        let app = test::init_service(
            App::new().app_data(donors).app_data(contact).configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/find?blood_group=A%2B&location=Seoul")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/find?sent=0&error=db_error"
        );
    }
}

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::{Form, FormRejection, SignedCookieJar};
use tracing::{debug, warn};

use crate::errors::{AppError, SubmissionError};
use crate::interviews::flash::Flash;
use crate::interviews::form::InterviewForm;
use crate::interviews::service::{list_interviews, submit_interview};
use crate::interviews::views::InterviewsPage;
use crate::state::AppState;

pub const SAVED_NOTICE: &str = "Interview saved successfully!";
pub const FAILED_NOTICE: &str = "The interview could not be saved. Please try again.";

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<(SignedCookieJar, Html<String>), AppError> {
    let (jar, flash) = Flash::take(jar);
    let listing = list_interviews(state.store.as_ref()).await;
    let page = InterviewsPage::new(&listing.interviews, flash, listing.load_failed);
    Ok((jar, Html(page.render()?)))
}

/// POST /submit
pub async fn handle_submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    form: Result<Form<InterviewForm>, FormRejection>,
) -> (SignedCookieJar, Redirect) {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!("Unreadable submission: {rejection}");
            return (Flash::error(FAILED_NOTICE).attach(jar), Redirect::to("/"));
        }
    };

    let flash = match submit_interview(state.store.as_ref(), &form).await {
        Ok(created) => {
            debug!(
                "Submission for {} recorded at {}",
                created.contact_name, created.recorded_at
            );
            Flash::success(SAVED_NOTICE)
        }
        Err(SubmissionError::DuplicateContact(name)) => Flash::error(format!(
            "Duplicate contact: {name} has already been interviewed."
        )),
        Err(e) if e.is_rejection() => Flash::error(format!("Could not save: {e}.")),
        // Storage detail was logged by the service.
        Err(_) => Flash::error(FAILED_NOTICE),
    };
    (flash.attach(jar), Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use tower::ServiceExt;

    use crate::interviews::store::testing::{MemoryStore, UnavailableStore};
    use crate::interviews::store::InterviewStore;
    use crate::routes::build_router;
    use crate::state::testing::test_state;

    fn app(store: Arc<dyn InterviewStore>) -> Router {
        build_router(test_state(store))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn submit(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/submit")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// `name=value` part of the first Set-Cookie header.
    fn flash_cookie(response: &axum::response::Response) -> String {
        let raw = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("flash cookie set")
            .to_str()
            .unwrap();
        raw.split(';').next().unwrap().to_string()
    }

    async fn follow(app: &Router, cookie: &str) -> String {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_text(response).await
    }

    #[tokio::test]
    async fn test_submit_redirects_and_lists() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store.clone());

        let response = app
            .clone()
            .oneshot(submit(
                "contact_name=Ana+Ruiz&department=Other&other_department=Logistics\
                 &longest_process=manual_process&longest_process=data_validation\
                 &decision_driver=cost_reduction&decision_driver=unknown_token",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(store.count(), 1);

        let records = store.list_newest_first().await.unwrap();
        assert_eq!(records[0].department, "Logistics");
        assert!(records[0].longest_process.manual_process);
        assert!(records[0].longest_process.data_validation);
        assert!(!records[0].longest_process.multiple_sources);
        assert!(records[0].decision_driver.cost_reduction);

        let html = follow(&app, &flash_cookie(&response)).await;
        assert!(html.contains(super::SAVED_NOTICE));
        assert!(html.contains("Ana Ruiz"));
        assert!(html.contains("Manual process, Data validation"));
    }

    #[tokio::test]
    async fn test_duplicate_submission_flashes_name() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store.clone());

        app.clone()
            .oneshot(submit("contact_name=Ana+Ruiz&department=Finance"))
            .await
            .unwrap();
        let response = app
            .clone()
            .oneshot(submit("contact_name=ANA+RUIZ&department=Finance"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.count(), 1);
        let html = follow(&app, &flash_cookie(&response)).await;
        assert!(html.contains("Duplicate contact: ANA RUIZ"));
    }

    #[tokio::test]
    async fn test_database_down_shows_generic_notice() {
        let app = app(Arc::new(UnavailableStore));

        let response = app
            .clone()
            .oneshot(submit("contact_name=Ana+Ruiz&department=Finance"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let html = follow(&app, &flash_cookie(&response)).await;
        assert!(html.contains(super::FAILED_NOTICE));
        assert!(html.contains("could not be loaded"));
        assert!(!html.contains("PoolTimedOut"));
        assert!(!html.contains("pool timed out"));
    }

    #[tokio::test]
    async fn test_unparsable_form_redirects_with_notice() {
        let store = Arc::new(MemoryStore::default());
        let app = app(store.clone());

        let response = app
            .clone()
            .oneshot(submit("contact_name=A&contact_name=B&department=IT"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        assert_eq!(store.count(), 0);
        let html = follow(&app, &flash_cookie(&response)).await;
        assert!(html.contains(super::FAILED_NOTICE));
    }

    #[tokio::test]
    async fn test_home_renders_empty_listing() {
        let app = app(Arc::new(MemoryStore::default()));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("No interviews recorded yet."));
    }

    #[tokio::test]
    async fn test_tampered_flash_cookie_ignored() {
        let app = app(Arc::new(MemoryStore::default()));
        let html = follow(&app, "flash=not-a-signed-value").await;
        assert!(!html.contains("class=\"notice"));
    }
}

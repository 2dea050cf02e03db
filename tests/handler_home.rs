mod common;

use axum::Router;
use axum_test::TestServer;
use blog_service::web::routes::shell_routes;

#[tokio::test]
async fn test_home_page_renders_static_shell() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new().merge(shell_routes()).with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Skill Labs"));
    assert!(html.contains("Vineeth"));
    assert!(html.contains("Vishal Bhat"));
    assert!(html.contains("Sreenivaas"));
}

use crate::helpers::TestContext;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn root_serves_the_site(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.get_root().await;

    assert_eq!(response.status().as_u16(), 200);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

use crate::helpers::spawn_app;
use fake::Fake;
use fake::faker::internet::en::SafeEmail;

#[actix_web::test]
async fn email_valid_submission_ret201_and_appends_one_row() {
    let app = spawn_app().await;

    let response = app.post_email(r#"{"email":"a@example.com"}"#.into()).await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        serde_json::json!({"message": "Email written to CSV successfully"}),
        body
    );
    assert_eq!("a@example.com\n", app.captured_emails());
}

#[actix_web::test]
async fn email_invalid_body_ret400() {
    let test_cases = [
        ("not json", "body is not JSON"),
        (r#"{"address":"a@example.com"}"#, "missing email field"),
        (r#"{"email":42}"#, "email is not a string"),
        ("", "empty body"),
    ];

    let app = spawn_app().await;
    for (body, case) in test_cases {
        let response = app.post_email(body.into()).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "The api did not fail with code 400 when payload was {}",
            case
        );
    }
}

#[actix_web::test]
async fn email_sequential_submissions_append_in_order() {
    let app = spawn_app().await;

    let emails: Vec<String> = (0..3).map(|_| SafeEmail().fake()).collect();
    for email in &emails {
        let response = app.post_email(format!(r#"{{"email":"{email}"}}"#)).await;
        assert_eq!(response.status().as_u16(), 201);
    }

    let expected: String = emails.iter().map(|email| format!("{email}\n")).collect();
    assert_eq!(expected, app.captured_emails());
}

#[actix_web::test]
async fn email_submissions_are_not_validated_or_deduplicated() {
    let app = spawn_app().await;

    for _ in 0..2 {
        let response = app.post_email(r#"{"email":"not-an-address"}"#.into()).await;
        assert_eq!(response.status().as_u16(), 201);
    }

    assert_eq!("not-an-address\nnot-an-address\n", app.captured_emails());
}

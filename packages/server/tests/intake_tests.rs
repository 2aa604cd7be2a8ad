//! Public intake forms, admin listings and communities.

mod common;

use crate::common::*;
use server_core::domains::communities::actions::create_community;
use server_core::domains::communities::data::CreateCommunityInput;
use server_core::kernel::test_dependencies::MockMailer;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn creator_application_normalizes_email_and_defaults_platform(ctx: &TestHarness) {
    let email = unique_email("mixed");
    let shouted = email.to_uppercase();

    let result = ctx
        .graphql()
        .query(&format!(
            r#"mutation {{
                submitCreatorApplication(input: {{
                    name: "  Mixed Case  ",
                    email: " {shouted} ",
                    followers: "12k",
                    profileUrl: "https://instagram.com/mixed"
                }}) {{ name email platform status }}
            }}"#
        ))
        .await;

    let application = &result["submitCreatorApplication"];
    assert_eq!(application["name"], "Mixed Case");
    assert_eq!(application["email"], email.as_str());
    assert_eq!(application["platform"], "Instagram");
    assert_eq!(application["status"], "PENDING");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn creator_application_rejects_missing_fields(ctx: &TestHarness) {
    let result = ctx
        .graphql()
        .execute(
            r#"mutation {
                submitCreatorApplication(input: {
                    name: "No Followers",
                    email: "nofollowers@x.edu",
                    followers: "   ",
                    profileUrl: "@none"
                }) { id }
            }"#,
        )
        .await;

    assert_eq!(result.errors, vec!["followers is required".to_string()]);

    let stored: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM student_submissions WHERE email = $1")
            .bind("nofollowers@x.edu")
            .fetch_one(&ctx.db_pool)
            .await
            .unwrap();
    assert_eq!(stored, 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn application_status_reflects_approval(ctx: &TestHarness) {
    let pending_email = unique_email("status-pending");
    let approved_email = unique_email("status-approved");
    create_pending_submission(&ctx.db_pool, "Pending", &pending_email)
        .await
        .unwrap();
    create_approved_submission(&ctx.db_pool, "Approved", &approved_email)
        .await
        .unwrap();

    let query = |email: &str| {
        format!(r#"query {{ applicationStatus(email: "{email}") {{ approved }} }}"#)
    };

    let pending = ctx.graphql().query(&query(&pending_email)).await;
    assert_eq!(pending["applicationStatus"]["approved"], false);

    let approved = ctx
        .graphql()
        .query(&query(&approved_email.to_uppercase()))
        .await;
    assert_eq!(approved["applicationStatus"]["approved"], true);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn brand_request_is_listed_for_admins_only(ctx: &TestHarness) {
    let email = unique_email("brand");

    ctx.graphql()
        .query(&format!(
            r#"mutation {{
                submitBrandRequest(input: {{
                    companyName: "Acme",
                    contactName: "Road Runner",
                    email: "{email}",
                    campaignDetails: "Spring launch"
                }}) {{ id }}
            }}"#
        ))
        .await;

    let listing = "query { brandSubmissions { email companyName } }";

    let creator = ctx.graphql_as_user().execute(listing).await;
    assert_eq!(creator.errors, vec!["Admin access required".to_string()]);

    let admin = ctx.graphql_as_admin().query(listing).await;
    let found = admin["brandSubmissions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|b| b["email"] == email.as_str() && b["companyName"] == "Acme");
    assert!(found);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn creator_submissions_filter_by_status(ctx: &TestHarness) {
    let pending_email = unique_email("filter-pending");
    let approved_email = unique_email("filter-approved");
    create_pending_submission(&ctx.db_pool, "P", &pending_email)
        .await
        .unwrap();
    create_approved_submission(&ctx.db_pool, "A", &approved_email)
        .await
        .unwrap();

    let approved = ctx
        .graphql_as_admin()
        .query("query { creatorSubmissions(status: APPROVED) { email status } }")
        .await;

    let rows = approved["creatorSubmissions"].as_array().unwrap();
    assert!(rows.iter().all(|r| r["status"] == "APPROVED"));
    assert!(rows.iter().any(|r| r["email"] == approved_email.as_str()));
    assert!(!rows.iter().any(|r| r["email"] == pending_email.as_str()));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn squads_lists_only_active(ctx: &TestHarness) {
    sqlx::query(
        "INSERT INTO squads (id, name, niche, total_followers, is_active)
         VALUES (gen_random_uuid(), 'Active Squad', 'fitness', 42000, true),
                (gen_random_uuid(), 'Retired Squad', 'gaming', 1000, false)",
    )
    .execute(&ctx.db_pool)
    .await
    .unwrap();

    let result = ctx.graphql().query("query { squads { name niche } }").await;
    let names: Vec<&str> = result["squads"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s["name"].as_str())
        .collect();

    assert!(names.contains(&"Active Squad"));
    assert!(!names.contains(&"Retired Squad"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_community_sends_invite_with_join_link(ctx: &TestHarness) {
    let email = unique_email("founder");

    let result = ctx
        .graphql_as_user()
        .query(&format!(
            r#"mutation {{
                createCommunity(input: {{
                    name: "Campus Creators",
                    creatorName: "Jane Doe",
                    creatorEmail: "{email}"
                }}) {{
                    notified
                    community {{ id joinLink }}
                }}
            }}"#
        ))
        .await;

    let created = &result["createCommunity"];
    assert_eq!(created["notified"], true);

    let id = created["community"]["id"].as_str().unwrap();
    let join_link = format!("{}/community/{}", TEST_SITE_URL, id);
    assert_eq!(created["community"]["joinLink"], join_link.as_str());

    let sent = ctx.mailer.sent_to(&email);
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Welcome to Campus Creators - Nano Community");
    assert!(sent[0].html.contains(&join_link));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn create_community_requires_sign_in(ctx: &TestHarness) {
    let result = ctx
        .graphql()
        .execute(
            r#"mutation {
                createCommunity(input: {
                    name: "Nope",
                    creatorName: "Anon",
                    creatorEmail: "anon@x.edu"
                }) { notified }
            }"#,
        )
        .await;

    assert_eq!(result.errors, vec!["Authentication required".to_string()]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn community_survives_invite_failure(ctx: &TestHarness) {
    let email = unique_email("unlucky");
    let deps = ctx.deps_with_mailer(MockMailer::failing("relay unavailable"));

    let outcome = create_community(
        CreateCommunityInput {
            name: "Unlucky Few".to_string(),
            description: Some("Invite bounced".to_string()),
            creator_name: "Unlucky".to_string(),
            creator_email: email.clone(),
        },
        &deps,
    )
    .await
    .unwrap();

    assert!(outcome.notification_error.is_some());

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM communities WHERE creator_email = $1")
        .bind(&email)
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(stored, 1);
}

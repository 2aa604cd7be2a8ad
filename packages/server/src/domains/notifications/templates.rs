//! The two fixed HTML email templates.
//!
//! Rendered through handlebars in strict mode; every `{{field}}` is HTML-escaped.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::json;

/// A rendered email body with its subject line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Sign-up link carried by the approval email: `{site}/auth?email={encoded}`.
pub fn signup_url(site_url: &str, email: &str) -> String {
    format!(
        "{}/auth?email={}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(email)
    )
}

const CREATOR_APPROVAL_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
    .container { max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }
    .content { background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px; }
    .button { display: inline-block; background: #667eea; color: white; padding: 15px 30px; text-decoration: none; border-radius: 5px; margin: 20px 0; font-weight: bold; }
    .footer { text-align: center; margin-top: 30px; color: #666; font-size: 12px; }
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>Welcome to Our Creator Network!</h1>
    </div>
    <div class="content">
      <p>Hi {{name}},</p>
      <p>Great news! Your application has been <strong>approved</strong>. We've reviewed your profile and we're excited to have you join our network of nano-influencers.</p>
      <p>You can now create your account and start earning from your following:</p>
      <p style="text-align: center;">
        <a href="{{signup_url}}" class="button">Create Your Account</a>
      </p>
      <p>Once you sign up, you'll be able to:</p>
      <ul>
        <li>Browse and join squads in your niche</li>
        <li>Apply to brand campaigns</li>
        <li>Track your earnings</li>
        <li>Connect with other creators</li>
      </ul>
      <p>If you have any questions, feel free to reply to this email.</p>
      <p>Welcome aboard!</p>
      <p><strong>The Team</strong></p>
    </div>
    <div class="footer">
      <p>This email was sent because you applied to join our creator network.</p>
    </div>
  </div>
</body>
</html>
"#;

const COMMUNITY_INVITE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; border-radius: 10px 10px 0 0; text-align: center; }
    .content { background: #f9fafb; padding: 30px; border-radius: 0 0 10px 10px; }
    .button { display: inline-block; background: #667eea; color: white; padding: 12px 30px; text-decoration: none; border-radius: 5px; margin: 20px 0; }
    .link { background: #e5e7eb; padding: 15px; border-radius: 5px; word-break: break-all; }
    .footer { text-align: center; margin-top: 20px; color: #666; font-size: 14px; }
  </style>
</head>
<body>
  <div class="header">
    <h1>Welcome to Your Community!</h1>
  </div>
  <div class="content">
    <p>Hi {{creator_name}},</p>
    <p>Congratulations! Your community "<strong>{{community_name}}</strong>" has been created on Nano Community.</p>
    <p>You can now join your community and start sharing your thoughts and content:</p>
    <div style="text-align: center;">
      <a href="{{join_link}}" class="button">Join Your Community</a>
    </div>
    <p>Share this link with others to grow your community:</p>
    <div class="link">{{join_link}}</div>
    <p>Get ready to connect with like-minded creators and share amazing content!</p>
  </div>
  <div class="footer">
    <p>Nano Community - Where Creators Connect</p>
  </div>
</body>
</html>
"#;

fn render(template: &str, data: &serde_json::Value) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .render_template(template, data)
        .context("Failed to render email template")
}

pub fn creator_approval(name: &str, signup_url: &str) -> Result<RenderedEmail> {
    let html = render(
        CREATOR_APPROVAL_HTML,
        &json!({ "name": name, "signup_url": signup_url }),
    )?;

    Ok(RenderedEmail {
        subject: "🎉 Your Creator Application is Approved!".to_string(),
        html,
    })
}

pub fn community_invite(
    creator_name: &str,
    community_name: &str,
    join_link: &str,
) -> Result<RenderedEmail> {
    let html = render(
        COMMUNITY_INVITE_HTML,
        &json!({
            "creator_name": creator_name,
            "community_name": community_name,
            "join_link": join_link,
        }),
    )?;

    Ok(RenderedEmail {
        subject: format!("Welcome to {} - Nano Community", community_name),
        html,
    })
}

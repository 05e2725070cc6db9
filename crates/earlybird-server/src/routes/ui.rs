//! Server-rendered landing page and success view.
//!
//! `GET /` renders the signup form, or the success view once the shared
//! submission flag is set. The form posts to `/submit`; the success
//! view's "Submit Another Lead" button posts to `/reset`. Pages are
//! assembled from constants with `{{PLACEHOLDER}}` substitution — the
//! only interpolated values are server-generated (the signup count and
//! fixed notice strings), never raw visitor input.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use earlybird_core::error::SubmitError;
use earlybird_core::submit::RawSubmission;

use crate::state::AppState;

/// Build the UI router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/submit", post(submit_form))
        .route("/reset", post(reset_form))
}

/// Urlencoded fields from the landing-page form.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    industry: String,
}

/// `GET /` — form or success view, depending on the shared flag.
async fn landing_page(State(state): State<AppState>) -> Html<String> {
    if state.session.is_submitted() {
        Html(render_success(&state).await)
    } else {
        Html(render_form(None))
    }
}

/// `POST /submit` — run the signup workflow for the HTML form.
///
/// Success redirects to `/`, which now renders the success view. A
/// failure re-renders the form with a blocking notice.
async fn submit_form(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    let input = RawSubmission {
        name: form.name,
        email: form.email,
        industry: form.industry,
    };

    match state.workflow.submit(&input).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            let status = match &err {
                SubmitError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
                SubmitError::Busy => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            };
            let notice = match &err {
                SubmitError::Store(inner) => {
                    tracing::error!(error = %inner, "lead insert failed");
                    "Something went wrong. Please try again in a moment.".to_owned()
                }
                other => other.to_string(),
            };
            (status, Html(render_form(Some(notice.as_str())))).into_response()
        }
    }
}

/// `POST /reset` — "Submit Another Lead".
async fn reset_form(State(state): State<AppState>) -> Redirect {
    state.session.reset();
    Redirect::to("/")
}

/// Render the success view with the visitor's signup position.
///
/// A count failure degrades to a dash — the success page never errors.
async fn render_success(state: &AppState) -> String {
    let position = match state.store.count().await {
        Ok(n) => n.to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "signup count query failed");
            "—".to_owned()
        }
    };

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(PAGE_HEAD);
    html.push_str(&SUCCESS_BODY.replace("{{POSITION}}", &position));
    html
}

/// Render the signup form, with an optional blocking notice.
fn render_form(notice: Option<&str>) -> String {
    let banner = notice
        .map(|msg| format!(r#"<div class="notice">{msg}</div>"#))
        .unwrap_or_default();

    let mut html = String::with_capacity(16 * 1024);
    html.push_str(PAGE_HEAD);
    html.push_str(&FORM_BODY.replace("{{NOTICE}}", &banner));
    html
}

/// CSS and HTML head shared by the form and success views.
const PAGE_HEAD: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/><meta name="viewport" content="width=device-width,initial-scale=1"/>
<title>StartupName &mdash; The Future of Innovation Starts Here</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#0C0A1A;--text:#EDEAFB;--text-muted:#8B86A8;--primary:#7C5CFC;--accent:#38E0C8;--card:rgba(255,255,255,.04);--card-border:rgba(255,255,255,.09);--font:-apple-system,'Segoe UI',Roboto,sans-serif}
body{font-family:var(--font);background:var(--bg);color:var(--text);line-height:1.6;-webkit-font-smoothing:antialiased;min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:48px 16px}
.brand{display:flex;align-items:center;gap:10px;font-size:22px;font-weight:800;margin-bottom:28px}
.brand-mark{width:34px;height:34px;border-radius:10px;background:linear-gradient(135deg,#7C5CFC,#38E0C8)}
.hero{text-align:center;max-width:720px;margin-bottom:40px}
.hero h1{font-size:44px;font-weight:800;line-height:1.1;letter-spacing:-1.5px;margin-bottom:20px}
.hero h1 span{background:linear-gradient(135deg,#7C5CFC,#38E0C8);-webkit-background-clip:text;-webkit-text-fill-color:transparent;background-clip:text}
.hero p{font-size:17px;color:var(--text-muted);max-width:560px;margin:0 auto 28px}
.proof{display:flex;gap:28px;justify-content:center;font-size:13px;color:var(--text-muted);margin-bottom:8px}
.card{width:100%;max-width:420px;background:var(--card);border:1px solid var(--card-border);border-radius:18px;padding:32px;backdrop-filter:blur(8px)}
.card h2{font-size:22px;font-weight:700;text-align:center;margin-bottom:6px}
.card .sub{font-size:14px;color:var(--text-muted);text-align:center;margin-bottom:22px}
.field{margin-bottom:16px}
.field label{display:block;font-size:13px;font-weight:600;margin-bottom:6px}
.field input{width:100%;padding:11px 14px;border-radius:10px;border:1px solid var(--card-border);background:rgba(255,255,255,.05);color:var(--text);font-size:14px;outline:none}
.field input:focus{border-color:var(--primary)}
.btn{display:block;width:100%;padding:13px;border-radius:10px;border:none;cursor:pointer;font-size:15px;font-weight:700;background:linear-gradient(135deg,#7C5CFC,#5A3DF0);color:#fff}
.btn:hover{opacity:.92}
.btn-outline{background:transparent;border:1.5px solid var(--card-border);color:var(--text)}
.notice{background:rgba(255,99,99,.12);border:1px solid rgba(255,99,99,.35);color:#FFB4B4;border-radius:10px;padding:12px 14px;font-size:13px;margin-bottom:16px}
.fineprint{font-size:12px;color:var(--text-muted);text-align:center;margin-top:18px}
.success-mark{width:72px;height:72px;border-radius:50%;background:linear-gradient(135deg,#38E0C8,#7C5CFC);display:flex;align-items:center;justify-content:center;margin:0 auto 20px;font-size:34px}
.position{font-size:14px;color:var(--accent);text-align:center;margin-bottom:24px}
.nextbox{background:rgba(56,224,200,.08);border:1px solid rgba(56,224,200,.2);border-radius:12px;padding:16px;font-size:13px;margin-bottom:20px}
.footer{margin-top:44px;font-size:13px;color:var(--text-muted)}
@media(max-width:600px){.hero h1{font-size:32px}.proof{flex-direction:column;gap:6px;align-items:center}}
</style></head>
"##;

/// HTML body for the signup form view.
const FORM_BODY: &str = r##"<body>
<div class="brand"><div class="brand-mark"></div>StartupName</div>
<section class="hero">
  <h1>The Future of <span>Innovation</span><br/>Starts Here</h1>
  <p>Join thousands of forward-thinking individuals who are shaping tomorrow's technology. Be the first to experience revolutionary solutions that will transform how we work, create, and connect.</p>
  <div class="proof">
    <span>10,000+ Members</span>
    <span>4.9/5 Rating</span>
    <span>Launching Soon</span>
  </div>
</section>
<div class="card">
  <h2>Join the Revolution</h2>
  <p class="sub">Be the first to experience the future of innovation</p>
  {{NOTICE}}
  <form method="post" action="/submit">
    <div class="field">
      <label for="name">Name</label>
      <input id="name" name="name" type="text" placeholder="Enter your name"/>
    </div>
    <div class="field">
      <label for="email">Email</label>
      <input id="email" name="email" type="email" placeholder="Enter your email"/>
    </div>
    <div class="field">
      <label for="industry">Industry (Optional)</label>
      <input id="industry" name="industry" type="text" placeholder="e.g., Technology, Healthcare, Finance"/>
    </div>
    <button class="btn" type="submit">Get Early Access</button>
  </form>
  <p class="fineprint">&#128274; We respect your privacy. No spam, ever.</p>
</div>
<footer class="footer">&copy; 2025 StartupName. Building the future, one innovation at a time.</footer>
</body></html>
"##;

/// HTML body for the success view.
const SUCCESS_BODY: &str = r##"<body>
<div class="brand"><div class="brand-mark"></div>StartupName</div>
<div class="card">
  <div class="success-mark">&#10003;</div>
  <h2>Welcome aboard! &#127881;</h2>
  <p class="sub">Thanks for joining! Check your email for confirmation &mdash; we'll be in touch soon with updates.</p>
  <p class="position">You're #{{POSITION}} to join our community</p>
  <div class="nextbox">
    <strong>What's next?</strong><br/>
    We'll send you exclusive updates, early access, and behind-the-scenes content as we build something amazing.
  </div>
  <form method="post" action="/reset">
    <button class="btn btn-outline" type="submit">Submit Another Lead</button>
  </form>
</div>
<footer class="footer">&copy; 2025 StartupName. Building the future, one innovation at a time.</footer>
</body></html>
"##;

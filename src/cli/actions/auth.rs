use crate::{
    cli::{actions::Action, globals::GlobalArgs},
    config::AppConfig,
    router::{self, GuardDecision, paths},
    session::{FileTokenStore, Session},
};
use anyhow::{Context, Result};
use url::Url;

/// Handle the requested action against the configured backend.
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    // The CLI always talks to a remote backend, so the base must be absolute.
    let url = Url::parse(&globals.api_url)
        .with_context(|| format!("invalid API base URL: {}", globals.api_url))?;
    let config = AppConfig::new(url.as_str());
    let store = Box::new(FileTokenStore::new(&globals.data_dir));

    match action {
        Action::RequestOtp { phone_number } => {
            let session = Session::new(config, store)?;
            let requested = session.request_otp(&phone_number).await?;
            println!("{}", requested.message);
        }
        Action::VerifyOtp { phone_number, code } => {
            let mut session = Session::new(config, store)?;
            session.verify_otp(&phone_number, &code).await?;
            match session.user() {
                Some(profile) => println!("Signed in as {}", profile.phone_number),
                None => println!("Signed in"),
            }
        }
        Action::Whoami => {
            let session = Session::hydrate(config, store).await?;
            match session.user() {
                Some(profile) => {
                    println!("id:       {}", profile.id);
                    println!("phone:    {}", profile.phone_number);
                    println!("approved: {}", profile.is_approved);
                    println!("admin:    {}", profile.is_admin);
                    println!("landing:  {}", landing_page(&session));
                }
                None => println!("Not signed in"),
            }
        }
        Action::Logout => {
            let mut session = Session::new(config, store)?;
            session.logout();
            println!("Signed out");
        }
    }

    Ok(())
}

/// First page the shell would land on, as decided by the navigation guard.
fn landing_page(session: &Session) -> &'static str {
    match router::decide(paths::LANDING, session.flags()) {
        GuardDecision::Redirect(path) => path,
        GuardDecision::Allow => paths::LANDING,
    }
}

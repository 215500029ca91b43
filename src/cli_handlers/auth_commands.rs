use crate::config;
use crate::error::Result;

/// Handle `todoist auth [token]`
pub fn handle_auth_command(token: Option<String>) -> Result<()> {
    match token {
        Some(token) => {
            let path = config::save_token(&token)?;
            println!("✓ Token saved to {}", path.display());
        },
        None => {
            if config::load_token()?.is_some() {
                println!("✓ Authenticated (config: {})", config::config_path()?.display());
            } else {
                println!("Not authenticated.");
                println!("Usage: todoist auth <your-api-token>");
                println!(
                    "Get a token at: https://todoist.com/app/settings/integrations/developer"
                );
            }
        },
    }
    Ok(())
}

/// Handle `todoist logout`
pub fn handle_logout_command() -> Result<()> {
    if config::clear_token()? {
        println!("✓ Logged out");
    } else {
        println!("No stored token to remove");
    }
    Ok(())
}

use crate::config::Config;
use crate::core::auth::UserDirectory;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{success, warning};
use std::io::{self, BufRead, IsTerminal, Write};

/// Handle the `session` command: log in, then run the session shell on stdin.
pub fn handle(user: &str, password: &Option<String>, cfg: &Config) -> AppResult<()> {
    let users = UserDirectory::new(cfg.accounts.clone());
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();

    let password = match password {
        Some(p) => p.clone(),
        None => {
            if interactive {
                print!("Password: ");
                io::stdout().flush().ok();
            }
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let account = users.login(user, &password)?;

    success(format!(
        "Welcome {} ({})",
        account.display_name, account.role_title
    ));
    if !account.shares_are_complete() {
        warning(format!(
            "Contract shares add up to {}% instead of 100%: monthly apportionment will not match the total.",
            account.shares_total()
        ));
    }

    let mut session = Session::new(account, cfg);
    session.run(&mut input, interactive)
}

//! `changeAuth`, `whoami`

use crate::authority::Authority;
use crate::commands::CommandContext;
use crate::error::CommandResult;

const USAGE: &str = "Error command, usage: changeAuth <admin | user | guest> <?password>";
const WRONG_PASSWORD: &str = "Error wrong password, usage: changeAuth <admin | user | guest> <?password>";

pub async fn change_auth(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let Some(target) = args.first().and_then(|word| word.parse::<Authority>().ok()) else {
        ctx.write(USAGE);
        return Ok(());
    };
    let password = args.get(1).map(String::as_str);
    let current = ctx.session.authority();

    if current == Authority::Admin {
        return grant(ctx, target);
    }

    match target {
        Authority::Admin => {
            let required = ctx.session.current_computer().admin_password().to_string();
            grant_with_password(ctx, target, &required, password)
        }
        Authority::User if current == Authority::User => {
            ctx.write("you are now connected as user");
            Ok(())
        }
        Authority::User => {
            let required = ctx.session.current_computer().user_password().to_string();
            grant_with_password(ctx, target, &required, password)
        }
        Authority::Guest if current == Authority::Guest => {
            ctx.write("you are now connected as guest");
            Ok(())
        }
        Authority::Guest => grant(ctx, target),
    }
}

/// An empty stored password lets anyone in.
fn grant_with_password(
    ctx: &mut CommandContext<'_>,
    target: Authority,
    required: &str,
    supplied: Option<&str>,
) -> CommandResult<()> {
    if required.is_empty() || supplied == Some(required) {
        grant(ctx, target)
    } else {
        ctx.write(WRONG_PASSWORD);
        Ok(())
    }
}

fn grant(ctx: &mut CommandContext<'_>, target: Authority) -> CommandResult<()> {
    let previous = ctx.session.authority();
    ctx.session.set_authority(target);
    ctx.refresh_prompt()?;
    tracing::info!(from = %previous, to = %target, "authority changed");
    ctx.write(format!("you are now connected as {}", target));
    Ok(())
}

pub async fn whoami(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let authority = ctx.session.authority();
    ctx.write(authority.as_str());
    Ok(())
}

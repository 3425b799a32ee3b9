//! `scan`, `connect`, `disconnect`

use crate::authority::Authority;
use crate::commands::CommandContext;
use crate::error::CommandResult;
use crate::io::iso_timestamp;

pub async fn scan(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write("Scanning network...");

    let network = ctx.session.network();
    let hosts: Vec<String> = network
        .linked(ctx.session.current())
        .iter()
        .map(|id| {
            let computer = network.computer(*id);
            format!("{}\t{}", computer.address(), computer.name())
        })
        .collect();

    if hosts.is_empty() {
        ctx.delay(ctx.latency.scan_empty_ms).await;
        ctx.write("none");
    }
    for host in hosts {
        let wait = ctx.jittered(ctx.latency.scan_base_ms, ctx.latency.scan_jitter_ms);
        ctx.delay(wait).await;
        ctx.write(host);
    }

    ctx.write("Scanning network completed");
    Ok(())
}

pub async fn connect(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let (Some(ip), Some(name)) = (args.first(), args.get(1)) else {
        ctx.write("Usage: connect <ip> <name> <?password>");
        return Ok(());
    };
    let password = args.get(2).map(String::as_str).unwrap_or("");
    let shown = args.join(" ");

    ctx.write(format!("try to connect to {} ...", shown));
    ctx.delay(ctx.latency.connect_ms).await;

    let from = ctx.session.current();
    let Some(target) = ctx.session.network().find_linked(from, ip, name, password) else {
        // Same message whatever was wrong
        ctx.write(format!(
            "connection to {} failed, please check ip and name by using scan or maybe you have wrong password",
            shown
        ));
        return Ok(());
    };

    let source = ctx.session.current_computer().address().clone();
    let timestamp = iso_timestamp(ctx.clock.now_millis());
    ctx.session
        .network_mut()
        .computer_mut(target)
        .record_connection(&source, &timestamp)?;

    ctx.session.set_connected(true);
    ctx.session.switch_computer(target);
    ctx.session.set_authority(Authority::Guest);
    ctx.refresh_prompt()?;
    ctx.console.update_connection(true);

    let computer = ctx.session.current_computer();
    let line = format!(
        "connection succeeded, you are now connected to {} {} => {}",
        computer.address(),
        computer.name(),
        computer.root_name()?
    );
    tracing::info!(from = %source, to = %computer.address(), "connected");
    ctx.write(line);
    Ok(())
}

pub async fn disconnect(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    ctx.write("disconnecting...");
    let wait = ctx.jittered(ctx.latency.disconnect_base_ms, ctx.latency.disconnect_jitter_ms);
    ctx.delay(wait).await;

    let owner = ctx.session.owner();
    ctx.session.set_connected(false);
    ctx.session.switch_computer(owner);
    ctx.session.set_authority(Authority::Admin);
    ctx.refresh_prompt()?;
    ctx.console.update_connection(false);

    let computer = ctx.session.current_computer();
    let line = format!(
        "disconnect succeeded, you are now back to {} {} => {}",
        computer.address(),
        computer.name(),
        computer.root_name()?
    );
    tracing::info!(home = %computer.address(), "disconnected");
    ctx.write(line);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::fixture::Fixture;
    use crate::authority::Authority;
    use crate::memory::MemoryState;
    use crate::network::{Computer, NetworkBuilder, CONNECTION_LOG, LOG_FOLDER, LOG_PARENT};
    use crate::session::Session;

    #[tokio::test]
    async fn test_scan_lists_hosts_in_order() {
        let mut fx = Fixture::new();

        assert_eq!(
            fx.run("scan").await,
            vec![
                "Scanning network...",
                "192.168.2.1\tBob",
                "192.168.0.254\tFry",
                "192.168.14.9\tMey",
                "193.169.1.11\tDan",
                "Scanning network completed",
            ]
        );
        assert_eq!(fx.clock.delays(), vec![250; 4]);
    }

    #[tokio::test]
    async fn test_scan_without_links() {
        let mut builder = NetworkBuilder::new();
        let lone = builder.add(Computer::new("10.0.0.1", "lone").unwrap());
        let session = Session::new(builder.build(), lone, MemoryState::default());
        let mut fx = Fixture::with_session(session);

        assert_eq!(
            fx.run("scan").await,
            vec!["Scanning network...", "none", "Scanning network completed"]
        );
        assert_eq!(fx.clock.delays(), vec![500]);
    }

    #[tokio::test]
    async fn test_scan_from_remote_sees_owner() {
        let mut fx = Fixture::new();
        fx.run("connect 192.168.0.254 Fry").await;

        assert_eq!(
            fx.run("scan").await,
            vec!["Scanning network...", "192.168.0.42\twax", "Scanning network completed"]
        );
    }

    #[tokio::test]
    async fn test_connect_usage() {
        let mut fx = Fixture::new();
        assert_eq!(fx.run("connect 192.168.2.1").await, vec!["Usage: connect <ip> <name> <?password>"]);
        assert!(fx.clock.delays().is_empty());
    }

    #[tokio::test]
    async fn test_connect_wrong_password() {
        let mut fx = Fixture::new();
        let home = fx.session.current();

        assert_eq!(
            fx.run("connect 192.168.2.1 Bob nope").await,
            vec![
                "try to connect to 192.168.2.1 Bob nope ...",
                "connection to 192.168.2.1 Bob nope failed, please check ip and name by using scan or maybe you have wrong password",
            ]
        );
        assert_eq!(fx.session.current(), home);
        assert!(!fx.session.is_connected());
        assert_eq!(fx.clock.delays(), vec![500]);
    }

    #[tokio::test]
    async fn test_connect_success() {
        let mut fx = Fixture::new();

        let lines = fx.run("connect 192.168.2.1 Bob bob").await;
        assert_eq!(
            lines.last().unwrap(),
            "connection succeeded, you are now connected to 192.168.2.1 Bob => home"
        );
        assert!(fx.session.is_connected());
        assert_eq!(fx.session.authority(), Authority::Guest);
        assert_eq!(fx.console.connected(), Some(true));
        assert_eq!(
            fx.console.prompt().unwrap().to_string(),
            "192.168.2.1 Bob[GUEST] => home#"
        );
    }

    #[tokio::test]
    async fn test_connect_open_host_accepts_any_password() {
        let mut fx = Fixture::new();
        fx.run("connect 192.168.0.254 Fry whatever").await;
        assert_eq!(fx.session.current_computer().name(), "Fry");

        fx.run("disconnect").await;
        fx.run("connect 192.168.0.254 Fry").await;
        assert_eq!(fx.session.current_computer().name(), "Fry");
    }

    #[tokio::test]
    async fn test_connect_writes_log() {
        let mut fx = Fixture::new();
        fx.run("connect 192.168.0.254 Fry").await;

        // Guest cannot see var/
        assert_eq!(fx.run("ls").await, vec![""]);

        let fs = fx.session.current_fs();
        let (var, _) = fs.find_child(fs.root(), LOG_PARENT).unwrap().unwrap();
        let (log, _) = fs.find_child(var, LOG_FOLDER).unwrap().unwrap();
        let file = fs.find_file(log, CONNECTION_LOG).unwrap().unwrap();
        assert_eq!(
            file.content(),
            "[LOGS STARTED]\n\n[2024-01-01T00:00:00.000Z] Connection received from 192.168.0.42"
        );
    }

    #[tokio::test]
    async fn test_disconnect_round_trip() {
        let mut fx = Fixture::new();
        let home = fx.session.current();
        let root = fx.session.current_folder();
        fx.run("cd intro").await;
        fx.run("connect 192.168.2.1 Bob bob").await;

        assert_eq!(
            fx.run("disconnect").await,
            vec![
                "disconnecting...",
                "disconnect succeeded, you are now back to 192.168.0.42 wax => main",
            ]
        );
        assert_eq!(fx.session.current(), home);
        assert_eq!(fx.session.current_folder(), root);
        assert_eq!(fx.session.authority(), Authority::Admin);
        assert!(!fx.session.is_connected());
        assert_eq!(fx.console.connected(), Some(false));
        assert_eq!(fx.clock.delays(), vec![500, 500]);
    }
}

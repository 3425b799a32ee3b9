//! `ls`, `pwd`, `cd`, `cat`, `rm`

use crate::authority::is_authorized;
use crate::commands::CommandContext;
use crate::error::{CommandResult, FsError};
use crate::fs::{EntryKind, Removed};

/// The only relative path `cd` understands.
pub(crate) const PARENT_TOKEN: &str = "../";

pub async fn ls(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let have = ctx.session.authority();
    let listing = ctx
        .session
        .current_fs()
        .visible_names(ctx.session.current_folder(), have)?
        .join("  ");
    ctx.write(listing);
    Ok(())
}

pub async fn pwd(_args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let cwd = ctx.session.cwd()?;
    ctx.write(cwd);
    Ok(())
}

pub async fn cd(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let Some(target) = args.first() else {
        ctx.write("Usage: cd <folder> or ../");
        return Ok(());
    };

    let current = ctx.session.current_folder();
    let destination = if target == PARENT_TOKEN {
        let Some(parent) = ctx.session.current_fs().parent(current)? else {
            ctx.write("error : no parent folder.");
            return Ok(());
        };
        let name = ctx.session.current_fs().folder(parent)?.name().to_string();
        Some((parent, name))
    } else {
        let have = ctx.session.authority();
        ctx.session
            .current_fs()
            .find_child(current, target)?
            .filter(|(_, folder)| is_authorized(have, folder.access()))
            .map(|(id, folder)| (id, folder.name().to_string()))
    };

    match destination {
        Some((id, name)) => {
            ctx.session.set_current_folder(id);
            ctx.write(format!("currentFolder : {}", name));
            ctx.refresh_prompt()?;
        }
        // Unauthorized folders are reported as missing
        None => ctx.write(format!("error : folder does not exist with name \"{}\"", target)),
    }
    Ok(())
}

pub async fn cat(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let Some(name) = args.first() else {
        ctx.write("Usage: cat <file>");
        return Ok(());
    };

    let have = ctx.session.authority();
    let content = ctx
        .session
        .current_fs()
        .find_file(ctx.session.current_folder(), name)?
        .filter(|file| is_authorized(have, file.access()))
        .map(|file| file.content().to_string());

    match content {
        Some(content) => ctx.write(content),
        None => ctx.write(format!("error : file does not exist with name \"{}\"", name)),
    }
    Ok(())
}

pub async fn rm(args: &[String], ctx: &mut CommandContext<'_>) -> CommandResult<()> {
    let Some(name) = args.first() else {
        ctx.write("Usage: rm <file_or_folder>");
        return Ok(());
    };

    let have = ctx.session.authority();
    let folder = ctx.session.current_folder();
    let line = match ctx.session.current_fs_mut().remove(folder, name, have) {
        Ok(Removed::File(_)) => format!("File '{}' deleted.", name),
        Ok(Removed::Folder(_)) => format!("Folder '{}' and its files have been deleted.", name),
        Err(FsError::PermissionDenied { kind: EntryKind::File, .. }) => {
            format!("rm: permission denied to delete file '{}'.", name)
        }
        Err(FsError::PermissionDenied { kind: EntryKind::Folder, .. }) => {
            format!("rm: permission denied to delete folder '{}'.", name)
        }
        Err(FsError::HasSubfolders(_)) => {
            format!("rm: failed to remove '{}': Directory contains other directories.", name)
        }
        Err(FsError::NotFound(_)) => format!("rm: cannot remove '{}': No such file or directory.", name),
        Err(err) => return Err(err.into()),
    };
    ctx.write(line);
    Ok(())
}

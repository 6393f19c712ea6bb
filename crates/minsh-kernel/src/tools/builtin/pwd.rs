//! pwd — Print working directory.

use async_trait::async_trait;

use minsh_types::ExecResult;

use crate::tools::{ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};

/// Pwd tool: print the shell's working directory.
pub struct Pwd;

#[async_trait]
impl Tool for Pwd {
    fn name(&self) -> &str {
        "pwd"
    }

    fn schema(&self) -> ToolSchema {
        // -L/-P are accepted for compatibility; paths are always logical
        ToolSchema::new("pwd", "Print current working directory")
            .param(ParamSchema::flag("logical", "Print the logical path").with_aliases(["-L"]))
            .param(ParamSchema::flag("physical", "Print the physical path").with_aliases(["-P"]))
            .example("Show current directory", "pwd")
    }

    async fn execute(&self, _args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        ExecResult::success(ctx.cwd.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::parse_args;
    use crate::vfs::MemoryFs;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_pwd_default() {
        let mut ctx = ExecContext::new(Arc::new(MemoryFs::new()), "/");
        let result = Pwd.execute(ToolArgs::new(), &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "/");
    }

    #[tokio::test]
    async fn test_pwd_changed() {
        let mut ctx = ExecContext::new(Arc::new(MemoryFs::new()), "/");
        ctx.set_cwd(PathBuf::from("/mnt/project"));

        let result = Pwd.execute(ToolArgs::new(), &mut ctx).await;
        assert_eq!(result.out, "/mnt/project");
    }

    #[tokio::test]
    async fn test_pwd_ignores_operands() {
        let mut ctx = ExecContext::new(Arc::new(MemoryFs::new()), "/srv");
        let args = parse_args(&Pwd.schema(), &["-L", "extra"]).unwrap();
        let result = Pwd.execute(args, &mut ctx).await;
        assert!(result.ok());
        assert_eq!(result.out, "/srv");
    }
}

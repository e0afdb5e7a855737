#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process::ExitCode;
    use anyhow::Result;
    use clap::Parser;
    use tempfile::tempdir;

    use class_map_tools::cli::{self, Cli, Commands, RewriteArgs, ScanArgs};
    use class_map_tools::config::{ComponentConfig, ToolConfig};

    #[test]
    fn test_parse_defaults() -> Result<()> {
        let cli = Cli::try_parse_from(["classmap", "scan"])?;
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
        match cli.command {
            Commands::Scan(args) => {
                assert!(args.root.is_none());
                assert!(args.output.is_none());
                assert!(!args.check);
            }
            other => panic!("expected scan, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["classmap", "rewrite"])?;
        match cli.command {
            Commands::Rewrite(args) => {
                assert_eq!(args.root, PathBuf::from("."));
                assert!(!args.dry_run);
            }
            other => panic!("expected rewrite, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() -> Result<()> {
        let cli = Cli::try_parse_from([
            "classmap", "rewrite", "--dry-run", "--root", "tree", "-v", "--config", "tools.toml",
        ])?;
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("tools.toml")));
        assert!(matches!(cli.command, Commands::Rewrite(RewriteArgs { dry_run: true, .. })));
        Ok(())
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["classmap", "index"]).is_err());
        assert!(Cli::try_parse_from(["classmap"]).is_err());
    }

    #[test]
    fn test_scan_then_check() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("svg"))?;
        fs::write(src.join("svg").join("qsvgrenderer.h"), "class Q_SVG_EXPORT QSvgRenderer : public QObject\n{\n};\n")?;
        let output = dir.path().join("out").join("map.h");

        let config = ToolConfig {
            components: vec![ComponentConfig::new("svg", "Q_SVG_EXPORT")],
            ..ToolConfig::default()
        };
        let args = || ScanArgs {
            root: Some(src.clone()),
            output: Some(output.clone()),
            ..ScanArgs::default()
        };

        let check = || ScanArgs { check: true, ..args() };
        assert_eq!(cli::run_scan(config.clone(), check())?, ExitCode::FAILURE);
        assert!(!output.exists());

        assert_eq!(cli::run_scan(config.clone(), args())?, ExitCode::SUCCESS);
        let written = fs::read_to_string(&output)?;
        assert!(written.contains("    { \"QSvgRenderer\", \"QtSvg/qsvgrenderer.h\"},\n"));
        assert!(written.contains("static const int qclass_lib_count = 0;\n"));

        assert_eq!(cli::run_scan(config, check())?, ExitCode::SUCCESS);
        Ok(())
    }

    #[test]
    fn test_json_output_leaves_header_unwritten() -> Result<()> {
        let dir = tempdir()?;
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("xml"))?;
        fs::write(src.join("xml").join("qdom.h"), "class Q_XML_EXPORT QDomNode\n{\n};\n")?;
        let output = dir.path().join("map.h");

        let config = ToolConfig {
            components: vec![ComponentConfig::new("xml", "Q_XML_EXPORT")],
            ..ToolConfig::default()
        };
        let args = ScanArgs {
            root: Some(src),
            output: Some(output.clone()),
            json: true,
            ..ScanArgs::default()
        };

        assert_eq!(cli::run_scan(config, args)?, ExitCode::SUCCESS);
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_json_and_check_are_exclusive() {
        assert!(Cli::try_parse_from(["classmap", "scan", "--json", "--check"]).is_err());
    }

    #[test]
    fn test_rewrite_ignores_scanner_settings() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.h"), "class QObject;\n")?;

        let config = ToolConfig {
            components: Vec::new(),
            header_extension: String::new(),
            ..ToolConfig::default()
        };
        let args = RewriteArgs {
            root: dir.path().to_path_buf(),
            dry_run: false,
        };

        assert_eq!(cli::run_rewrite(config, args)?, ExitCode::SUCCESS);
        assert_eq!(fs::read_to_string(dir.path().join("a.h"))?, "#include <QObject>\n");
        Ok(())
    }
}

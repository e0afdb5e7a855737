#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use class_map_tools::rewrite::{AllowList, ForwardDeclRewriter};

    fn extensions() -> Vec<String> {
        ["cpp", "cc", "hpp", "h"].iter().map(|e| e.to_string()).collect()
    }

    fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(path, content)?;
        Ok(())
    }

    #[test]
    fn test_rewrite_tree_in_place() -> Result<()> {
        let dir = tempdir()?;
        let root = dir.path();

        write_file(root, "gui/widget.h", "#ifndef WIDGET_H\n#define WIDGET_H\n\nclass QWidget;\nstruct QEvent;\n\nclass Widget {\n    QWidget *parent;\n};\n#endif\n")?;
        write_file(root, "gui/widget.cpp", "#include \"widget.h\"\nclass QPainter;\n")?;
        write_file(root, "core/plain.cc", "int answer() { return 42; }\n")?;
        write_file(root, "docs/readme.txt", "class QWidget;\n")?;

        let rewriter = ForwardDeclRewriter::new(&AllowList::builtin(), extensions())?;
        let stats = rewriter.rewrite_tree(root)?;

        assert_eq!(stats.files_scanned, 3);
        assert_eq!(stats.files_rewritten, 2);
        let names: Vec<&str> = stats.replacements.iter().map(|r| r.class_name.as_str()).collect();
        assert_eq!(names, vec!["QPainter", "QWidget", "QEvent"]);

        assert_eq!(
            fs::read_to_string(root.join("gui/widget.h"))?,
            "#ifndef WIDGET_H\n#define WIDGET_H\n\n#include <QWidget>\n#include <QEvent>\n\nclass Widget {\n    QWidget *parent;\n};\n#endif\n"
        );
        assert_eq!(
            fs::read_to_string(root.join("gui/widget.cpp"))?,
            "#include \"widget.h\"\n#include <QPainter>\n"
        );
        assert_eq!(fs::read_to_string(root.join("core/plain.cc"))?, "int answer() { return 42; }\n");
        // Files with other extensions are never touched
        assert_eq!(fs::read_to_string(root.join("docs/readme.txt"))?, "class QWidget;\n");
        Ok(())
    }

    #[test]
    fn test_dry_run_leaves_files_untouched() -> Result<()> {
        let dir = tempdir()?;
        write_file(dir.path(), "a.h", "class QObject;\n")?;

        let rewriter = ForwardDeclRewriter::new(&AllowList::builtin(), extensions())?.dry_run(true);
        let stats = rewriter.rewrite_tree(dir.path())?;

        assert_eq!(stats.replacements.len(), 1);
        assert_eq!(stats.replacements[0].declaration, "class QObject;");
        assert_eq!(fs::read_to_string(dir.path().join("a.h"))?, "class QObject;\n");
        Ok(())
    }

    #[test]
    fn test_repeated_declaration_replaced_everywhere() -> Result<()> {
        let dir = tempdir()?;
        write_file(dir.path(), "a.hpp", "class QString;\nnamespace ns {\nclass QString;\n}\n")?;

        let rewriter = ForwardDeclRewriter::new(&AllowList::from_names(["QString"]), extensions())?;
        rewriter.rewrite_tree(dir.path())?;

        assert_eq!(
            fs::read_to_string(dir.path().join("a.hpp"))?,
            "#include <QString>\nnamespace ns {\n#include <QString>\n}\n"
        );
        Ok(())
    }

    #[test]
    fn test_custom_allow_list_file() -> Result<()> {
        let dir = tempdir()?;
        let list_path = dir.path().join("classes.txt");
        fs::write(&list_path, "# project classes\nKWidget\n")?;
        write_file(dir.path(), "src/a.h", "class KWidget;\nclass QWidget;\n")?;

        let list = AllowList::from_file(&list_path)?;
        ForwardDeclRewriter::new(&list, extensions())?.rewrite_tree(dir.path().join("src"))?;

        assert_eq!(
            fs::read_to_string(dir.path().join("src/a.h"))?,
            "#include <KWidget>\nclass QWidget;\n"
        );
        Ok(())
    }

    #[test]
    fn test_undecodable_file_stops_the_pass() -> Result<()> {
        let dir = tempdir()?;
        write_file(dir.path(), "a.h", "class QObject;\n")?;
        fs::write(dir.path().join("b.h"), [0xFF, 0xFE, 0x00])?;
        write_file(dir.path(), "c.h", "class QObject;\n")?;

        let rewriter = ForwardDeclRewriter::new(&AllowList::builtin(), extensions())?;
        assert!(rewriter.rewrite_tree(dir.path()).is_err());

        // Files before the failure stay rewritten, later ones are not reached
        assert_eq!(fs::read_to_string(dir.path().join("a.h"))?, "#include <QObject>\n");
        assert_eq!(fs::read_to_string(dir.path().join("c.h"))?, "class QObject;\n");
        Ok(())
    }
}

use crate::markdown::anchor::{normalize_with_style, NormalizationStyle};
use crate::markdown::toc::TocOptions;
use crate::markdown::types::{HeadingRecord, TocTree};
use crate::tree::{RenderOptions, Tree};

/// First line of a generated TOC block
pub const TOC_BEGIN_COMMENT: &str = "<!-- GMT TOC BEGIN -->";
/// Last line of a generated TOC block
pub const TOC_END_COMMENT: &str = "<!-- GMT TOC END -->";

/// Render a TOC tree as a nested Markdown bullet list.
///
/// The root is never rendered. Unless `include_title` is set, level-1
/// headings are skipped and their children take their place at depth 0.
pub fn generate_toc(tree: &TocTree, options: &TocOptions) -> String {
    let render_options = RenderOptions::bullet_list(
        options.bullet_char,
        options.indentation,
        options.indentation_char,
    );

    let mut body = String::new();
    let mut depth = 0;

    if !options.include_title {
        if let Some(caption) = &options.toc_title {
            let caption_line = Tree::new(caption.as_str())
                .format_as_string(&render_options, |c| c.to_string());
            body.push_str(&caption_line);
            depth = 1;
        }
    }

    for branch in visible_branches(tree, options.include_title) {
        body.push_str(&branch.format_at_depth(&render_options, depth, |heading| {
            toc_entry(heading, options.style)
        }));
    }

    if options.include_begin_end_comment {
        format!("{}\n{}{}", TOC_BEGIN_COMMENT, body, TOC_END_COMMENT)
            .trim_matches('\n')
            .to_string()
    } else {
        body.trim_matches('\n').to_string()
    }
}

/// Render with default options apart from the ones given
pub fn render(
    tree: &TocTree,
    include_sentinels: bool,
    bullet_char: char,
    indentation: usize,
) -> String {
    let options = TocOptions {
        include_begin_end_comment: include_sentinels,
        bullet_char,
        indentation,
        ..TocOptions::default()
    };
    generate_toc(tree, &options)
}

fn visible_branches(tree: &TocTree, include_title: bool) -> Vec<&TocTree> {
    if include_title {
        return tree.branches.iter().collect();
    }

    tree.branches
        .iter()
        .flat_map(|branch| {
            if branch.data.level == 1 {
                branch.branches.iter().collect::<Vec<_>>()
            } else {
                vec![branch]
            }
        })
        .collect()
}

/// `[text](#anchor)`, with `-serial` appended for repeated headings
fn toc_entry(heading: &HeadingRecord, style: NormalizationStyle) -> String {
    let serial = if heading.serial > 0 {
        format!("-{}", heading.serial)
    } else {
        String::new()
    };

    format!(
        "[{}](#{}{})",
        heading.content,
        normalize_with_style(&heading.content, style),
        serial
    )
}

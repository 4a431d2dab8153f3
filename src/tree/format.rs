use crate::tree::Tree;

/// Characters and widths used when turning a [`Tree`] into text.
///
/// Each node becomes one line: `{prefix}{branch_char}{leading} {content}`,
/// where `leading` is `branch_leading_char` repeated `indentation - 2` times.
/// Children extend the prefix by `indentation` columns, drawing
/// `trunk_char` in the first column while later siblings are still pending.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub trunk_char: char,
    pub branch_char: char,
    pub branch_leading_char: char,
    pub indentation_char: char,
    pub indentation: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            trunk_char: '|',
            branch_char: '+',
            branch_leading_char: '-',
            indentation_char: ' ',
            indentation: 3,
        }
    }
}

impl RenderOptions {
    /// Options producing a plain Markdown bullet list
    pub fn bullet_list(bullet_char: char, indentation: usize, indentation_char: char) -> Self {
        Self {
            trunk_char: indentation_char,
            branch_char: bullet_char,
            branch_leading_char: ' ',
            indentation_char,
            indentation,
        }
    }

    fn indent(&self, depth: usize) -> String {
        self.indentation_char
            .to_string()
            .repeat(self.indentation * depth)
    }
}

impl<T> Tree<T> {
    /// Render this subtree starting at depth 0
    pub fn format_as_string<F>(&self, options: &RenderOptions, content: F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.format_at_depth(options, 0, content)
    }

    /// Render this subtree as if it were nested `depth` levels deep
    pub fn format_at_depth<F>(&self, options: &RenderOptions, depth: usize, content: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut output = String::new();
        write_node(self, options, &content, &options.indent(depth), true, &mut output);
        output
    }
}

fn write_node<T, F>(
    tree: &Tree<T>,
    options: &RenderOptions,
    content: &F,
    prefix: &str,
    last: bool,
    output: &mut String,
) where
    F: Fn(&T) -> String,
{
    let leading = options
        .branch_leading_char
        .to_string()
        .repeat(options.indentation.saturating_sub(2));

    output.push_str(prefix);
    output.push(options.branch_char);
    output.push_str(&leading);
    output.push(' ');
    output.push_str(&content(&tree.data));
    output.push('\n');

    let mut child_prefix = String::from(prefix);
    if last {
        child_prefix.push_str(&options.indent(1));
    } else {
        child_prefix.push(options.trunk_char);
        child_prefix.push_str(
            &options
                .indentation_char
                .to_string()
                .repeat(options.indentation.saturating_sub(1)),
        );
    }

    let count = tree.branches.len();
    for (i, branch) in tree.branches.iter().enumerate() {
        write_node(branch, options, content, &child_prefix, i + 1 == count, output);
    }
}

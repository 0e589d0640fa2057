#[macro_use]
mod common;

lox_ok!(line_comment_is_ignored, "// comment\nprint \"ok\";", "ok\n");

lox_ok!(
    block_comment_is_ignored,
    "/* this whole\n   line is a comment */\nprint \"ok\";",
    "ok\n"
);

lox_ok!(
    block_comments_do_not_nest,
    "/* outer /* inner */ print \"leftover\"; /* tail */",
    "leftover\n"
);

lox_err!(
    unterminated_block_comment_is_a_scan_error,
    "/* never closed",
    code: 65,
    stderr: "[line 1] Error: Unterminated block comment\n"
);

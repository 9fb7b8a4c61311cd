// src/cli/usage.rs

/// Full help text printed for `-h`/`--help`.
pub const USAGE: &str = "\
Tool to parse an xml note and print it in a readable format.

Command line usage:
    parsenote [-h/--help] [--json] [-v/--verbose] xml_file

Options:
    -h/--help:      Print this text and exit
    --json:         Print every field of the note as JSON
    -v/--verbose:   Log more to stderr (-v debug, -vv trace)
    -V/--version:   Print the version and exit
Argument:
    xml_file: path to an xml note file; options go before it, anything
              after it counts as another file

It can also be used as a library:
    let note = parsenote::parse_note_file(\"note.xml\")?;
    let line = parsenote::TextPresenter::new().render(&note)?;
";

/// Printed when the tool gets anything but exactly one file argument.
pub const USAGE_HINT: &str = "Use -h/--help for command line help.";

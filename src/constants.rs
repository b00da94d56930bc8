// Color constants shared by the console frontend to keep a
// consistent scheme across listings, previews and notifications
#![allow(dead_code)]

pub const FORMAT_RESET: &str = "\x1b[0m";
pub const FORMAT_BOLD: &str = "\x1b[1m";
pub const FORMAT_GRAY: &str = "\x1b[90m";
pub const FORMAT_RED: &str = "\x1b[31m";
pub const FORMAT_GREEN: &str = "\x1b[32m";
pub const FORMAT_YELLOW: &str = "\x1b[33m";
pub const FORMAT_CYAN: &str = "\x1b[36m";

// Template for the interactive help screen
pub const HELP_TEMPLATE: &str = r#"
# batflow Help

## Editing Commands
  add ID                 - Append a step (see `commands` for IDs)
  rm INDEX               - Remove the step at INDEX
  mv FROM TO             - Move a step (TO is clamped to the last slot)
  set INDEX KEY VALUE    - Set one parameter of a step
  name TEXT              - Set the project name
  undo                   - Revert the last structural change
  clear                  - Reset to the one-line baseline script

## Project Management
  preset [KEY]           - List presets, or load one by key
  load PATH              - Load a project JSON file
  save                   - Write the project JSON into the output directory
  export                 - Write the .bat script into the output directory
  copy                   - Print the script for copying
  autosave on|off        - Toggle autosave of the working state
  restore                - Restore the autosaved working state

## Inspection
  show                   - Show the step list and the script preview
  commands               - List the command catalog
  help                   - Display this help
  quit                   - Exit the editor
"#;

use crate::config::Config;
use crate::sink::FileSink;
use anyhow::{anyhow, bail, Result};
use blockpage_compiler_html::{serialize, CompileOptions, Export, ExportSink};
use blockpage_editor::{Action, Builder, ElementValue, FieldKey, Layout};
use blockpage_model::ElementKind;
use clap::Args;
use colored::Colorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Element placement mode (overrides config)
    #[arg(short, long)]
    pub layout: Option<Layout>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

const HELP: &str = "\
Commands:
  add <kind>                 heading | paragraph | link | list | image
  open <index>               edit an element
  set text <value>           heading, paragraph or image source
  set link-text <value>
  set link-url <value>
  set item <n> <value>       list item, counted from 0
  x <n> | y <n>              set the canvas coordinates
  click <x> <y> [index]      click the canvas, optionally on an element
  lock                       toggle lock mode
  save                       commit the element being edited
  show                       list elements and the open form
  html                       print the export
  export                     write website.html
  help | quit";

/// One line of input at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    Show,
    Html,
    Export,
    Help,
    Quit,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let layout = args.layout.unwrap_or(config.layout);
    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };

    println!(
        "{} ({} layout, type {} for commands)",
        "🧱 Blockpage editor".bright_blue().bold(),
        layout,
        "help".cyan()
    );

    let mut builder = Builder::new(layout).with_canvas_rect(config.canvas.to_rect());
    let mut sink = FileSink::new(out_dir);
    let options = CompileOptions::from(&config.compiler_options);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_prompt(&mut builder, stdin.lock(), stdout.lock(), &mut sink, &options)
}

/// Read commands from `input` until EOF or `quit`
pub fn run_prompt<R, W>(
    builder: &mut Builder,
    input: R,
    mut output: W,
    sink: &mut dyn ExportSink,
    options: &CompileOptions,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(err) = execute(builder, command, &mut output, sink, options) {
                    writeln!(output, "{} {}", "✗".red(), err)?;
                }
            }
            Err(err) => writeln!(output, "{} {}", "✗".red(), err)?,
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    if let Some(session) = builder.session() {
        writeln!(
            output,
            "{} element {} had unsaved edits",
            "⚠️".yellow(),
            session.index
        )?;
    }

    Ok(())
}

fn execute<W: Write>(
    builder: &mut Builder,
    command: Command,
    output: &mut W,
    sink: &mut dyn ExportSink,
    options: &CompileOptions,
) -> Result<()> {
    match command {
        Command::Action(action) => {
            let outcome = builder.dispatch(action)?;
            writeln!(output, "{} {:?}", "✓".green(), outcome)?;
        }
        Command::Show => show(builder, output)?,
        Command::Html => writeln!(output, "{}", serialize(builder.elements()))?,
        Command::Export => {
            let export = Export::from_elements(builder.elements(), options.clone());
            sink.offer(&export)?;
            writeln!(output, "{} Exported {}", "✓".green(), export.file_name)?;
        }
        Command::Help => writeln!(output, "{}", HELP)?,
        Command::Quit => {}
    }
    Ok(())
}

fn show<W: Write>(builder: &Builder, output: &mut W) -> Result<()> {
    if builder.elements().is_empty() {
        writeln!(output, "(empty page)")?;
    }

    for (i, element) in builder.elements().iter().enumerate() {
        let summary = match &element.value {
            ElementValue::Heading(text) | ElementValue::Paragraph(text) => text.clone(),
            ElementValue::Image(src) => src.clone(),
            ElementValue::Link(link) => format!("{} -> {}", link.text, link.url),
            ElementValue::List(items) => items.join(" | "),
        };
        match element.position {
            Some(position) => writeln!(output, "  [{}] {} {} at {}", i, element.kind(), summary, position)?,
            None => writeln!(output, "  [{}] {} {}", i, element.kind(), summary)?,
        }
    }

    let canvas = builder.canvas();
    if builder.layout() == Layout::Absolute {
        writeln!(
            output,
            "  canvas at {}{}",
            canvas.capture,
            if canvas.locked { ", locked" } else { "" }
        )?;
    }

    if let Some(session) = builder.session() {
        writeln!(output, "  editing [{}] {}:", session.index, session.kind)?;
        for field in session.fields() {
            writeln!(output, "    {}: {}", field.label, field.value)?;
        }
    }

    Ok(())
}

/// Parse one prompt line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let (word, rest) = split_word(line);

    let command = match word {
        "" => return Ok(None),
        "add" => Command::Action(Action::Add {
            kind: rest.parse::<ElementKind>()?,
        }),
        "open" => Command::Action(Action::Activate {
            index: parse_number(rest, "index")?,
        }),
        "set" => Command::Action(Action::Edit {
            edit: parse_field(rest)?.edit(field_value(rest)),
        }),
        "x" => Command::Action(Action::SetCapture {
            x: Some(parse_number(rest, "x")?),
            y: None,
        }),
        "y" => Command::Action(Action::SetCapture {
            x: None,
            y: Some(parse_number(rest, "y")?),
        }),
        "click" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            if parts.len() < 2 || parts.len() > 3 {
                bail!("Usage: click <x> <y> [index]");
            }
            Command::Action(Action::CanvasClick {
                client_x: parse_number(parts[0], "x")?,
                client_y: parse_number(parts[1], "y")?,
                target: parts
                    .get(2)
                    .map(|index| parse_number(index, "index"))
                    .transpose()?,
            })
        }
        "lock" => Command::Action(Action::ToggleLock),
        "save" => Command::Action(Action::Save),
        "show" => Command::Show,
        "html" => Command::Html,
        "export" => Command::Export,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command: {} (try `help`)", other),
    };

    Ok(Some(command))
}

fn parse_field(rest: &str) -> Result<FieldKey> {
    let (field, after) = split_word(rest);
    match field {
        "text" => Ok(FieldKey::Text),
        "link-text" => Ok(FieldKey::LinkText),
        "link-url" => Ok(FieldKey::LinkUrl),
        "item" => {
            let (index, _) = split_word(after);
            Ok(FieldKey::ListItem(parse_number(index, "item")?))
        }
        "" => bail!("Usage: set <field> <value>"),
        other => bail!("Unknown field: {}", other),
    }
}

/// Text after the field name (and after the item number for list items)
fn field_value(rest: &str) -> String {
    let (field, after) = split_word(rest);
    if field == "item" {
        split_word(after).1.to_string()
    } else {
        after.to_string()
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T> {
    text.trim()
        .parse()
        .map_err(|_| anyhow!("Expected a number for {}, got `{}`", what, text.trim()))
}

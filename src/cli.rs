//! Minimal CLI: read JSON/NDJSON → (get | set | delete) at a JSON Pointer
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use json_tree::{Pointer, Value, codec};
use rayon::prelude::*;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// query and edit JSON documents with RFC 6901 JSON Pointers
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the value at the pointer for every document
    Get(GetOut),
    /// assign a value at the pointer, creating missing containers
    Set(SetOut),
    /// delete the value at the pointer
    Delete(DeleteOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer addressing the node to operate on (e.g. /data/items/0/payload)
    #[arg(long, short, default_value_t = Pointer::root())]
    pointer: Pointer,

    /// One or more inputs. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// pretty-print output documents (ignored for NDJSON)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// output file (stdout if omitted); only valid with a single input
    #[arg(short, long, conflicts_with = "in_place")]
    out: Option<PathBuf>,

    /// rewrite each input file instead of printing. NDJSON files are written
    /// back one document per line, without their blank lines
    #[arg(long, default_value_t = false)]
    in_place: bool,
}

#[derive(clap::Parser, Debug)]
struct GetOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// print `null` for documents where the pointer does not resolve
    #[arg(long)]
    allow_missing: bool,

    /// pretty-print results
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(clap::Parser, Debug)]
struct SetOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// JSON text of the value to assign
    #[arg(long, short)]
    value: String,

    #[command(flatten)]
    output_settings: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct DeleteOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    output_settings: OutputSettings,
}

/// A loaded input file.
#[derive(Debug)]
struct Source {
    path: PathBuf,
    documents: Vec<Value>,
}

/// Something the command wants written somewhere.
#[derive(Debug, PartialEq)]
enum Emit {
    Stdout(String),
    File(PathBuf, String),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> Result<Vec<Source>> {
        let paths = resolve_file_path_patterns(&self.input)?;
        paths
            .par_iter()
            .map(|path| load_source(path, self.ndjson))
            .collect()
    }

    fn render(&self, value: &Value, pretty: bool) -> Result<String> {
        let text = if pretty && !self.ndjson {
            codec::to_string_pretty(value)?
        } else {
            codec::to_string(value)?
        };
        Ok(text)
    }
}

impl OutputSettings {
    fn emit(&self, input: &InputSettings, sources: Vec<Source>) -> Result<Vec<Emit>> {
        if self.out.is_some() && sources.len() != 1 {
            bail!("--out requires exactly one input file, got {}", sources.len());
        }
        let mut out = Vec::with_capacity(sources.len());
        for source in sources {
            let text = source
                .documents
                .iter()
                .map(|doc| input.render(doc, self.pretty))
                .collect::<Result<Vec<_>>>()?
                .join("\n");
            if self.in_place {
                out.push(Emit::File(source.path, text + "\n"));
            } else if let Some(path) = self.out.as_ref() {
                out.push(Emit::File(path.clone(), text + "\n"));
            } else {
                out.push(Emit::Stdout(text));
            }
        }
        Ok(out)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        for emit in self.execute()? {
            match emit {
                Emit::Stdout(text) => println!("{text}"),
                Emit::File(path, text) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("failed to create {}", parent.display()))?;
                    }
                    std::fs::write(&path, text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
            }
        }
        Ok(())
    }

    fn execute(&self) -> Result<Vec<Emit>> {
        match &self.cmd {
            Command::Get(target) => {
                let input = &target.input_settings;
                let mut out = Vec::new();
                for source in input.load()? {
                    for (line, doc) in source.documents.iter().enumerate() {
                        let text = match doc.pointer(&input.pointer) {
                            Some(found) => input.render(found, target.pretty)?,
                            None if target.allow_missing => String::from("null"),
                            None => bail!(
                                "JSON pointer {:?} not found in {} (document {})",
                                input.pointer.to_string(),
                                source.path.display(),
                                line + 1,
                            ),
                        };
                        out.push(Emit::Stdout(text));
                    }
                }
                Ok(out)
            }
            Command::Set(target) => {
                let input = &target.input_settings;
                let value = codec::from_str(&target.value)
                    .with_context(|| format!("failed to parse --value {:?}", target.value))?;
                let sources = edit_all(input, Some(value))?;
                target.output_settings.emit(input, sources)
            }
            Command::Delete(target) => {
                let input = &target.input_settings;
                let sources = edit_all(input, None)?;
                target.output_settings.emit(input, sources)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn edit_all(input: &InputSettings, value: Option<Value>) -> Result<Vec<Source>> {
    let mut sources = input.load()?;
    for source in sources.iter_mut() {
        for doc in source.documents.iter_mut() {
            doc.set_pointer(&input.pointer, value.clone());
        }
    }
    Ok(sources)
}

fn load_source(path: &Path, ndjson: bool) -> Result<Source> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read source file {}", path.display()))?;
    let documents = if ndjson {
        source
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                codec::from_str(line).with_context(|| {
                    format!("failed to parse JSON ({}, line {})", path.display(), i + 1)
                })
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        vec![codec::from_str(&source)
            .with_context(|| format!("failed to parse JSON source file ({})", path.display()))?]
    };
    log::debug!("{}: {} document(s)", path.display(), documents.len());
    Ok(Source { path: path.to_path_buf(), documents })
}

fn resolve_file_path_patterns<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    // Minimal glob detection for the `glob` crate syntax.
    fn has_glob_chars(s: &str) -> bool {
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();
    for raw in patterns {
        let pattern = raw.as_ref();
        if !has_glob_chars(pattern) {
            out.push(PathBuf::from(pattern));
            continue;
        }
        let before = out.len();
        for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern {pattern}"))? {
            out.push(entry?);
        }
        if out.len() == before {
            bail!("glob pattern matched no files: {pattern}");
        }
    }
    Ok(out)
}

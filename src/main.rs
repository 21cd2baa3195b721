use std::{env, fs, io, process};

use zalign::align;
use zalign::logging;
use zalign::models::{Region, SelectionSet, TextBuffer};
use zalign::services::adapters::{config_from_settings, ensure_settings_file, load_settings};
use zalign::services::ports::AlignConfig;

fn usage() -> ! {
    eprintln!("usage: zalign [--print] [--range START:END] <file>");
    process::exit(2);
}

/// 1-based 闭区间，如 "3:10"
fn parse_range(value: &str) -> Option<(usize, usize)> {
    let (start, end) = value.split_once(':')?;
    let start: usize = start.trim().parse().ok()?;
    let end: usize = end.trim().parse().ok()?;
    if start == 0 || end < start {
        return None;
    }
    Some((start, end))
}

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let mut print_only = false;
    let mut range: Option<(usize, usize)> = None;
    let mut file: Option<String> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" => print_only = true,
            "--range" => {
                let Some(value) = args.next() else { usage() };
                let Some(parsed) = parse_range(&value) else { usage() };
                range = Some(parsed);
            }
            _ if file.is_none() => file = Some(arg),
            _ => usage(),
        }
    }
    let Some(file) = file else { usage() };

    // 设置文件缺失时落回默认配置
    let _ = ensure_settings_file();
    let config = match load_settings() {
        Some(settings) => match config_from_settings(&settings) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("zalign: invalid settings: {err}");
                process::exit(2);
            }
        },
        None => AlignConfig::default(),
    };

    let text = fs::read_to_string(&file)?;
    let mut buffer = TextBuffer::from_text(&text);

    let last_row = buffer.len_lines().saturating_sub(1);
    let (start, end) = match range {
        Some((s, e)) => ((s - 1).min(last_row), (e - 1).min(last_row)),
        None => (0, last_row),
    };
    let selection = SelectionSet::single(Region::new(
        (start, 0),
        (end, buffer.line_grapheme_len(end)),
    ));

    let outcome = align::align(&mut buffer, &selection, &config);
    tracing::info!(file = %file, rows = outcome.edits.len(), "aligned");

    if print_only {
        let stdout = io::stdout();
        buffer.write_to(&mut stdout.lock())?;
    } else if outcome.changed() {
        let mut out = fs::File::create(&file)?;
        buffer.write_to(&mut out)?;
    }

    Ok(())
}

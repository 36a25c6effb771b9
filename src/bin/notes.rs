//! 笔记命令行客户端

use notes_app::client::{render, NoteBoard, NotesClient, DEFAULT_BASE_URL};
use notes_app::infrastructure::logger::init_console_logging;
use std::env;

enum Command {
    List,
    Show(i64),
    Add(String, String),
    Edit(i64, String, String),
    Remove(i64),
}

fn parse_id(value: &str) -> Option<i64> {
    value.parse().ok()
}

fn parse_command(args: &[String]) -> Option<Command> {
    let command = match args {
        [] => Command::List,
        [cmd] if cmd == "list" => Command::List,
        [cmd, id] if cmd == "show" => Command::Show(parse_id(id)?),
        [cmd, title, content] if cmd == "add" => Command::Add(title.clone(), content.clone()),
        [cmd, id, title, content] if cmd == "edit" => {
            Command::Edit(parse_id(id)?, title.clone(), content.clone())
        }
        [cmd, id] if cmd == "rm" => Command::Remove(parse_id(id)?),
        _ => return None,
    };
    Some(command)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_console_logging("warn");

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut base_url = env::var("NOTES_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    if args.first().map(String::as_str) == Some("--url") {
        if args.len() < 2 {
            print_usage();
            return Ok(());
        }
        base_url = args.remove(1);
        args.remove(0);
    }

    let Some(command) = parse_command(&args) else {
        print_usage();
        return Ok(());
    };

    let mut board = NoteBoard::new(NotesClient::new(base_url)?);

    if let Command::Show(id) = command {
        if let Some(note) = board.fetch(id).await {
            println!("{}", render::render_note(&note));
        }
        return Ok(());
    }

    board.load().await;

    match command {
        Command::List | Command::Show(_) => {}
        Command::Add(title, content) => {
            board.add(&title, &content).await;
        }
        Command::Edit(id, title, content) => {
            board.update(id, &title, &content).await;
        }
        Command::Remove(id) => {
            board.remove(id).await;
        }
    }

    println!("{}", render::render_notes(board.notes()));
    Ok(())
}

fn print_usage() {
    println!("用法: notes [--url <地址>] [命令]");
    println!();
    println!("可用的命令:");
    println!("  list                        - 列出所有笔记（默认）");
    println!("  show <id>                   - 查看一条笔记");
    println!("  add <标题> <内容>           - 新建笔记");
    println!("  edit <id> <标题> <内容>     - 修改笔记");
    println!("  rm <id>                     - 删除笔记");
    println!();
    println!("服务地址默认取 NOTES_API_URL，未设置时为 {}", DEFAULT_BASE_URL);
}

use char_list::StringLibrary;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut s = StringLibrary::create("Hello")?;
    s.append_text("World!")?;

    write!(out, "Original String: ")?;
    s.print(&mut out)?;
    write!(out, "Reversed String: ")?;
    s.print_reverse(&mut out)?;

    let mut cursor = s.cursor();
    s.insert_after_first(&mut cursor, 'o', ' ')?;
    write!(out, "After Insertion: ")?;
    s.print(&mut out)?;

    s.insert_after_all('l', 'X')?;
    write!(out, "After Recursive Insertion: ")?;
    s.print(&mut out)?;

    s.delete_first(' ');
    write!(out, "After Deletion: ")?;
    s.print(&mut out)?;

    s.delete_all('X');
    write!(out, "After Recursive Deletion: ")?;
    s.print(&mut out)?;

    s.destroy();
    Ok(())
}

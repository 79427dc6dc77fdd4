use std::{
    io::{self, Write},
    mem::MaybeUninit,
    os::fd::{AsRawFd, RawFd},
};

use lib_merge::{Board, Palette, Tile};

const SQUARE_HEIGHT: usize = 3;
const SQUARE_WIDTH: usize = 2 * (SQUARE_HEIGHT + 1) - 1;

fn border_row(
    out: &mut impl Write,
    size: usize,
    [left, mid, right]: [&str; 3],
) -> io::Result<()> {
    let bar = "━".repeat(SQUARE_WIDTH);

    out.write_all(left.as_bytes())?;

    for i in 0..size {
        if i != 0 {
            out.write_all(mid.as_bytes())?;
        }

        out.write_all(bar.as_bytes())?;
    }

    writeln!(out, "{right}")
}

fn draw_cell(out: &mut impl Write, tile: Tile, palette: &Palette) -> io::Result<()> {
    let blank = " ".repeat(SQUARE_WIDTH);

    match tile.color().and_then(|color| palette.rgb(color)) {
        Some(rgb) => write!(out, "┃\x1b[48;2;{};{};{}m{blank}\x1b[m", rgb.0, rgb.1, rgb.2),
        None => write!(out, "┃{blank}"),
    }
}

fn draw_board_row(out: &mut impl Write, row: &[Tile], palette: &Palette) -> io::Result<()> {
    for _ in 0..SQUARE_HEIGHT {
        for &tile in row {
            draw_cell(out, tile, palette)?;
        }

        out.write_all("┃\x1b[E".as_bytes())?;
    }

    Ok(())
}

/// Lines from the score line down to the line below the bottom border, where the cursor rests
/// between draws.
const fn board_lines(size: usize) -> usize {
    2 + size * (SQUARE_HEIGHT + 1)
}

const fn row_line(row: usize) -> usize {
    2 + row * (SQUARE_HEIGHT + 1)
}

fn empty_row(out: &mut impl Write, size: usize) -> io::Result<()> {
    let blank = " ".repeat(SQUARE_WIDTH);

    for _ in 0..size {
        write!(out, "┃{blank}")?;
    }

    out.write_all("┃\n".as_bytes())
}

fn redraw_rows(
    out: &mut impl Write,
    board: &Board,
    palette: &Palette,
    rows: impl Iterator<Item = usize>,
) -> io::Result<()> {
    let bottom = board_lines(board.size());

    for row in rows {
        let target_line = row_line(row);

        write!(out, "\x1b[{}F", bottom - target_line)?;
        draw_board_row(out, board.row(row), palette)?;
        write!(out, "\x1b[{}E", bottom - target_line - SQUARE_HEIGHT)?;
    }

    out.flush()
}

pub fn draw_board(
    out: &mut impl Write,
    board: &Board,
    palette: &Palette,
    score: u32,
) -> io::Result<()> {
    let size = board.size();

    write!(out, "\nScore: {score}\n")?;
    border_row(out, size, ["┏", "┳", "┓"])?;

    for i in 0..size {
        if i != 0 {
            border_row(out, size, ["┣", "╋", "┫"])?;
        }

        for _ in 0..SQUARE_HEIGHT {
            empty_row(out, size)?;
        }
    }

    border_row(out, size, ["┗", "┻", "┛"])?;

    let occupied_rows = (0..size).filter(|&i| board.row(i).iter().any(|tile| !tile.is_empty()));

    redraw_rows(out, board, palette, occupied_rows)
}

/// Redraws the score line and the rows that differ between `old_board` and `new_board`.
pub fn redraw_board(
    out: &mut impl Write,
    old_board: &Board,
    new_board: &Board,
    palette: &Palette,
    old_score: u32,
    new_score: u32,
) -> io::Result<()> {
    if new_score != old_score {
        let bottom = board_lines(new_board.size());
        write!(out, "\x1b[{bottom}FScore: {new_score}\x1b[K\x1b[{bottom}E")?;
    }

    let changed_rows = (0..new_board.size()).filter(|&i| old_board.row(i) != new_board.row(i));

    redraw_rows(out, new_board, palette, changed_rows)
}

/// Puts the terminal into unbuffered, no-echo input until dropped.
pub struct RawTerminal {
    fd: RawFd,
    original: libc::termios,
}

impl RawTerminal {
    pub fn new(fd: &impl AsRawFd) -> io::Result<Self> {
        let fd = fd.as_raw_fd();
        let mut termios = MaybeUninit::uninit();

        let original = unsafe {
            if libc::tcgetattr(fd, termios.as_mut_ptr()) != 0 {
                return Err(io::Error::last_os_error());
            }

            termios.assume_init()
        };

        let mut raw = original;
        raw.c_lflag &= !(libc::ECHO | libc::ICANON);

        unsafe {
            if libc::tcsetattr(fd, libc::TCSADRAIN, &raw) != 0 {
                return Err(io::Error::last_os_error());
            }
        }

        Ok(Self { fd, original })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSADRAIN, &self.original);
        }
    }
}

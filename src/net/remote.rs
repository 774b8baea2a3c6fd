//! src/net/remote.rs
//!
//! Line-based TCP control server for switching panels from other processes.
//!
//! Commands (case-insensitive keyword, one reply line each):
//! - `show <panel>` -> `OK <panel>` or `ERR invalid panel reference '<name>'`
//! - `active`       -> `OK <panel>` or `OK none`
//! - `list`         -> `OK login register reset`
//! - `quit`         -> `OK bye`, then the connection is closed
//!
//! Lines longer than `MAX_LINE` bytes get `ERR too long`; invalid UTF-8 is
//! decoded lossily and answered like any other line.

use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::thread;

use crate::state::{self, Origin, SharedState, StateError};
use crate::switcher::PanelId;

/// Longest accepted command line, newline excluded.
pub const MAX_LINE: usize = 256;

/// One read from a client.
#[derive(Debug, PartialEq, Eq)]
pub enum Incoming {
    Eof,
    Line(String),
    TooLong,
}

/// Read one newline-terminated command, never buffering more than `MAX_LINE + 1` bytes.
pub fn read_command<R: BufRead>(rdr: &mut R, buf: &mut Vec<u8>) -> io::Result<Incoming> {
    buf.clear();
    let n = rdr.by_ref().take(MAX_LINE as u64 + 1).read_until(b'\n', buf)?;
    if n == 0 {
        return Ok(Incoming::Eof);
    }
    if buf.len() > MAX_LINE && buf.last() != Some(&b'\n') {
        // discard the rest of the oversized line
        loop {
            buf.clear();
            let n = rdr.by_ref().take(MAX_LINE as u64).read_until(b'\n', buf)?;
            if n == 0 || buf.last() == Some(&b'\n') {
                break;
            }
        }
        return Ok(Incoming::TooLong);
    }
    Ok(Incoming::Line(String::from_utf8_lossy(buf).into_owned()))
}

/// Outcome of one command line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Line(String),
    Bye,
}

impl Reply {
    fn ok(body: impl std::fmt::Display) -> Self {
        Reply::Line(format!("OK {body}"))
    }

    fn err(body: impl std::fmt::Display) -> Self {
        Reply::Line(format!("ERR {body}"))
    }
}

/// Bind `addr` and serve each client on its own thread until the listener fails.
pub fn remote_server(addr: &str, state: SharedState) {
    let listener = match TcpListener::bind(addr) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "remote control bind failed");
            return;
        }
    };
    tracing::info!(%addr, "remote control listening");

    for stream in listener.incoming() {
        match stream {
            Ok(s) => {
                let st = state.clone();
                thread::spawn(move || handle_remote_client(s, st));
            }
            Err(e) => tracing::warn!(error = %e, "remote control accept failed"),
        }
    }
}

/// Execute one trimmed, non-empty command line against the shared state.
pub fn handle_command(raw: &str, st: &SharedState) -> Result<Reply, StateError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    let Some(keyword) = parts.first() else {
        return Ok(Reply::err("empty"));
    };

    let reply = match (keyword.to_lowercase().as_str(), parts.len()) {
        ("show", 2) => match state::write(st)?.show_named(parts[1], Origin::Remote) {
            Ok(panel) => Reply::ok(panel),
            Err(e) => Reply::err(e),
        },
        ("active", 1) => match state::read(st)?.active() {
            Some(panel) => Reply::ok(panel),
            None => Reply::ok("none"),
        },
        ("list", 1) => Reply::ok(
            PanelId::ALL
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        ("quit", 1) => Reply::Bye,
        _ => Reply::err(format!("unknown {}", parts.join(" "))),
    };
    Ok(reply)
}

pub fn handle_remote_client(mut s: TcpStream, state: SharedState) {
    let peer = s
        .peer_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "<peer?>".into());
    let reader = match s.try_clone() {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(%peer, error = %e, "could not clone client stream");
            return;
        }
    };
    tracing::debug!(%peer, "remote client connected");

    let mut rdr = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        let line = match read_command(&mut rdr, &mut buf) {
            Ok(Incoming::Line(line)) => line,
            Ok(Incoming::TooLong) => {
                tracing::debug!(%peer, limit = MAX_LINE, "remote line too long");
                if s.write_all(b"ERR too long\n").is_err() {
                    break;
                }
                continue;
            }
            Ok(Incoming::Eof) => break,
            Err(e) => {
                tracing::warn!(%peer, error = %e, "remote read failed");
                break;
            }
        };
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let reply = match handle_command(raw, &state) {
            Ok(Reply::Line(text)) => text,
            Ok(Reply::Bye) => {
                let _ = s.write_all(b"OK bye\n");
                break;
            }
            Err(e) => {
                tracing::error!(%peer, error = %e, "remote command failed");
                let _ = s.write_all(format!("ERR {e}\n").as_bytes());
                break;
            }
        };
        if s.write_all(format!("{reply}\n").as_bytes()).is_err() {
            break;
        }
    }

    tracing::debug!(%peer, "remote client disconnected");
    let _ = s.shutdown(Shutdown::Both);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{shared, test_state};

    fn line(r: Result<Reply, StateError>) -> String {
        match r.unwrap() {
            Reply::Line(s) => s,
            Reply::Bye => "<bye>".into(),
        }
    }

    #[test]
    fn show_switches_and_reports_panel() {
        let st = shared(test_state(10));
        assert_eq!(line(handle_command("show register", &st)), "OK register");
        assert_eq!(line(handle_command("SHOW Reset", &st)), "OK reset");
        assert_eq!(line(handle_command("active", &st)), "OK reset");
        let origin = st.read().unwrap().history.back().map(|t| t.origin);
        assert_eq!(origin, Some(Origin::Remote));
    }

    #[test]
    fn show_unknown_panel_is_an_error_reply() {
        let st = shared(test_state(10));
        handle_command("show login", &st).unwrap();
        assert_eq!(
            line(handle_command("show signup", &st)),
            "ERR invalid panel reference 'signup'"
        );
        assert_eq!(line(handle_command("active", &st)), "OK login");
    }

    #[test]
    fn other_commands() {
        let st = shared(test_state(10));
        assert_eq!(line(handle_command("active", &st)), "OK none");
        assert_eq!(line(handle_command("list", &st)), "OK login register reset");
        assert_eq!(line(handle_command("show", &st)), "ERR unknown show");
        assert_eq!(line(handle_command("dance now", &st)), "ERR unknown dance now");
        assert_eq!(handle_command("quit", &st).unwrap(), Reply::Bye);
    }

    #[test]
    fn read_command_splits_lines_and_caps_length() {
        let long = "a".repeat(MAX_LINE + 10);
        let input = format!("list\n{long}\nactive");
        let mut rdr = io::Cursor::new(input.into_bytes());
        let mut buf = Vec::new();
        assert_eq!(
            read_command(&mut rdr, &mut buf).unwrap(),
            Incoming::Line("list\n".into())
        );
        assert_eq!(read_command(&mut rdr, &mut buf).unwrap(), Incoming::TooLong);
        assert_eq!(
            read_command(&mut rdr, &mut buf).unwrap(),
            Incoming::Line("active".into())
        );
        assert_eq!(read_command(&mut rdr, &mut buf).unwrap(), Incoming::Eof);
    }

    #[test]
    fn line_of_exactly_max_length_is_accepted() {
        let exact = format!("{}\n", "b".repeat(MAX_LINE));
        let mut rdr = io::Cursor::new(exact.clone().into_bytes());
        let mut buf = Vec::new();
        assert_eq!(read_command(&mut rdr, &mut buf).unwrap(), Incoming::Line(exact));
    }

    fn session(input: &[u8]) -> (String, SharedState) {
        let st = shared(test_state(10));
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server_state = st.clone();
        let server = thread::spawn(move || {
            let (s, _) = listener.accept().unwrap();
            handle_remote_client(s, server_state);
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(input).unwrap();
        let mut replies = String::new();
        client.read_to_string(&mut replies).unwrap();
        server.join().unwrap();
        (replies, st)
    }

    #[test]
    fn invalid_utf8_gets_a_reply_and_the_session_continues() {
        let (replies, st) = session(b"show \xffx\nshow reset\nquit\n");
        let lines: Vec<&str> = replies.lines().collect();
        assert_eq!(lines.len(), 3, "{replies:?}");
        assert!(lines[0].starts_with("ERR invalid panel reference"));
        assert_eq!(&lines[1..], ["OK reset", "OK bye"]);
        assert_eq!(st.read().unwrap().active(), Some(PanelId::Reset));
    }

    #[test]
    fn oversized_line_is_rejected_without_dropping_the_client() {
        let mut input = vec![b'x'; MAX_LINE * 4];
        input.extend_from_slice(b"\nactive\nquit\n");
        let (replies, _) = session(&input);
        assert_eq!(replies, "ERR too long\nOK none\nOK bye\n");
    }

    #[test]
    fn serves_a_real_connection() {
        let st = shared(test_state(10));
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server_state = st.clone();
        let server = thread::spawn(move || {
            let (s, _) = listener.accept().unwrap();
            handle_remote_client(s, server_state);
        });

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(b"show reset\n\nshow nope\nquit\n").unwrap();
        let mut replies = String::new();
        std::io::Read::read_to_string(&mut client, &mut replies).unwrap();
        server.join().unwrap();

        assert_eq!(
            replies,
            "OK reset\nERR invalid panel reference 'nope'\nOK bye\n"
        );
        assert_eq!(st.read().unwrap().active(), Some(PanelId::Reset));
    }
}

//! Filesystem change notification over Linux inotify

use std::ffi::{CString, OsStr, OsString};
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// Fixed part of a kernel `inotify_event` record.
const EVENT_HEADER_LEN: usize = std::mem::size_of::<libc::inotify_event>();

/// Room for several events with maximum-length names.
const READ_BUFFER_LEN: usize = 4096;

/// Mask constants in the names scripts use.
pub const MASKS: &[(&str, u32)] = &[
    ("IN_ACCESS", libc::IN_ACCESS),
    ("IN_MODIFY", libc::IN_MODIFY),
    ("IN_ATTRIB", libc::IN_ATTRIB),
    ("IN_CLOSE_WRITE", libc::IN_CLOSE_WRITE),
    ("IN_CLOSE_NOWRITE", libc::IN_CLOSE_NOWRITE),
    ("IN_CLOSE", libc::IN_CLOSE),
    ("IN_OPEN", libc::IN_OPEN),
    ("IN_MOVED_FROM", libc::IN_MOVED_FROM),
    ("IN_MOVED_TO", libc::IN_MOVED_TO),
    ("IN_MOVE", libc::IN_MOVE),
    ("IN_CREATE", libc::IN_CREATE),
    ("IN_DELETE", libc::IN_DELETE),
    ("IN_DELETE_SELF", libc::IN_DELETE_SELF),
    ("IN_MOVE_SELF", libc::IN_MOVE_SELF),
    ("IN_ALL_EVENTS", libc::IN_ALL_EVENTS),
    ("IN_ONLYDIR", libc::IN_ONLYDIR),
    ("IN_DONT_FOLLOW", libc::IN_DONT_FOLLOW),
    ("IN_MASK_ADD", libc::IN_MASK_ADD),
    ("IN_ONESHOT", libc::IN_ONESHOT),
    ("IN_ISDIR", libc::IN_ISDIR),
    ("IN_IGNORED", libc::IN_IGNORED),
    ("IN_Q_OVERFLOW", libc::IN_Q_OVERFLOW),
    ("IN_UNMOUNT", libc::IN_UNMOUNT),
];

/// One decoded inotify event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub wd: i32,
    pub mask: u32,
    pub cookie: u32,
    /// Entry name, present for events on children of a watched directory.
    pub name: Option<OsString>,
}

/// An inotify instance. The descriptor is closed on drop.
#[derive(Debug)]
pub struct Inotify {
    fd: OwnedFd,
}

impl Inotify {
    pub fn init(blocking: bool) -> io::Result<Self> {
        let mut flags = libc::IN_CLOEXEC;
        if !blocking {
            flags |= libc::IN_NONBLOCK;
        }

        // SAFETY: no pointers involved; the result is checked below.
        let fd = unsafe { libc::inotify_init1(flags) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }

        // SAFETY: `fd` is a fresh descriptor owned by nobody else.
        Ok(Self {
            fd: unsafe { OwnedFd::from_raw_fd(fd) },
        })
    }

    pub fn add_watch(&self, path: &Path, mask: u32) -> io::Result<i32> {
        let path = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains a NUL byte"))?;

        // SAFETY: `path` is NUL terminated and outlives the call.
        let wd = unsafe { libc::inotify_add_watch(self.fd.as_raw_fd(), path.as_ptr(), mask) };
        if wd < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(wd)
    }

    pub fn remove_watch(&self, wd: i32) -> io::Result<()> {
        // SAFETY: plain integer arguments on a descriptor we own.
        if unsafe { libc::inotify_rm_watch(self.fd.as_raw_fd(), wd) } < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    /// Drain queued events. A non-blocking instance with nothing queued
    /// yields an empty list; a blocking one waits for at least one event.
    pub fn read_events(&self) -> io::Result<Vec<WatchEvent>> {
        let mut buf = [0u8; READ_BUFFER_LEN];
        // SAFETY: the kernel writes at most `buf.len()` bytes into `buf`.
        let n = unsafe { libc::read(self.fd.as_raw_fd(), buf.as_mut_ptr().cast(), buf.len()) };
        if n < 0 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::WouldBlock {
                return Ok(Vec::new());
            }
            return Err(err);
        }
        Ok(parse_events(&buf[..n as usize]))
    }
}

impl AsRawFd for Inotify {
    fn as_raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }
}

fn ne_u32(bytes: &[u8]) -> u32 {
    u32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn parse_events(mut bytes: &[u8]) -> Vec<WatchEvent> {
    let mut events = Vec::new();

    while bytes.len() >= EVENT_HEADER_LEN {
        let wd = ne_u32(&bytes[0..4]) as i32;
        let mask = ne_u32(&bytes[4..8]);
        let cookie = ne_u32(&bytes[8..12]);
        let len = ne_u32(&bytes[12..16]) as usize;

        let end = EVENT_HEADER_LEN + len;
        if bytes.len() < end {
            break;
        }

        // Names are NUL padded to the record length.
        let name = bytes[EVENT_HEADER_LEN..end]
            .split(|b| *b == 0)
            .next()
            .filter(|name| !name.is_empty())
            .map(|name| OsStr::from_bytes(name).to_os_string());

        events.push(WatchEvent { wd, mask, cookie, name });
        bytes = &bytes[end..];
    }

    events
}

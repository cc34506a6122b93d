//! Printing diagnostics to stderr.

//! `warn!` always prints, `trace!` only if the given `AtomicBool`
//! is set. Both have a `no*` twin expanding to nothing, so that a
//! module can be silenced via `use chj_util::nowarn as warn;`.

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}

#[macro_export]
macro_rules! nowarn {
    ($formatstr:expr $(,$arg:expr)*) => {
    }
}

/// Like `warn!`, but only prints when `$flag` (an `AtomicBool`,
/// e.g. a `pub static FOO_TRACE: AtomicBool = AtomicBool::new(false);`)
/// is set. Switch it on via
/// `FOO_TRACE.store(true, std::sync::atomic::Ordering::SeqCst)`.
#[macro_export]
macro_rules! trace {
    ($flag:expr, $formatstr:expr $(,$arg:expr)*) => { {
        if $flag.load(std::sync::atomic::Ordering::Relaxed) {
            use std::io::Write;
            let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
            let _ = write!(&mut outp, "T: ");
            let _ = write!(&mut outp, $formatstr $(,$arg)*);
            let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
            let _ = outp.flush();
        }
    } }
}

#[macro_export]
macro_rules! notrace {
    ($flag:expr, $formatstr:expr $(,$arg:expr)*) => {
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    static QUIET: AtomicBool = AtomicBool::new(false);

    #[test]
    fn t_macros_expand() {
        let n = 3;
        crate::trace!(QUIET, "not printed {}", n);
        crate::notrace!(QUIET, "never printed {}", n);
        crate::nowarn!("never printed {n}");
    }
}

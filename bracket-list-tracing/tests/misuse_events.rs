use std::{
    io,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::{Arc, Mutex, PoisonError},
};

use bracket_list::{Misuse, hooks::Hooks, hooks::MisuseHook, init};
use bracket_list_tracing::TracingMisuseHook;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn test_out_of_range_event() {
    let output = capture(|| {
        TracingMisuseHook.on_misuse(&Misuse::OutOfRange {
            position: 4,
            len: 4,
        });
    });

    assert!(output.contains("ERROR"), "{output}");
    assert!(output.contains("bracket_list::misuse"), "{output}");
    assert!(output.contains("out_of_range"), "{output}");
    assert!(output.contains("misuse.slot=4"), "{output}");
    assert!(!output.contains("misuse.argument"), "{output}");
    assert!(
        output.contains("dereferenced a cursor at position 4 of a bracket list of length 4"),
        "{output}"
    );
}

#[test]
fn test_already_converted_event() {
    let output = capture(|| {
        TracingMisuseHook.on_misuse(&Misuse::AlreadyConverted {
            index: 1,
            argument: "alloc::string::String",
        });
    });

    assert!(output.contains("already_converted"), "{output}");
    assert!(output.contains("misuse.slot=1"), "{output}");
    assert!(output.contains("misuse.argument"), "{output}");
    assert!(output.contains("alloc::string::String"), "{output}");
}

#[test]
fn test_empty_list_event() {
    let output = capture(|| TracingMisuseHook.on_misuse(&Misuse::EmptyList));

    assert!(output.contains("empty_list"), "{output}");
    assert!(!output.contains("misuse.slot"), "{output}");
}

#[test]
fn test_installed_hook_sees_real_misuse() {
    // The panicking hook turns the abort into an unwind we can observe.
    Hooks::new()
        .misuse_hook(TracingMisuseHook)
        .misuse_hook(|misuse: &Misuse| panic!("{misuse}"))
        .install()
        .expect("hooks are only installed by this test");

    let output = capture(|| {
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut list = init![1u8, 2u8];
            let refs = list.references::<u32>();
            let _ = refs.end().convert();
        }));
        assert!(result.is_err());
    });

    assert!(output.contains("out_of_range"), "{output}");
    assert!(output.contains("misuse.slot=2"), "{output}");
}

// simple example illustrating how the leading bytes of a file
// decide its media type

use mime_magic::{match_magic, MAGIC_MAX_LEN};

fn print_verdict(label: &str, buf: &[u8]) {
    let verdict = match_magic(buf);
    println!("{}: {} ({}/{})", label, verdict, verdict.media(), verdict.subtype());
}

fn main() {
    print_verdict("png header", b"\x89PNG\r\n\x1a\n");
    print_verdict("shell script", b"#!/bin/sh\nexit 0\n");
    print_verdict("plain text", b"Hello, world!\n");
    print_verdict("empty", b"");
    print_verdict("garbage", &[0x00, 0x01, 0x02, 0x03]);

    // Files passed on the command line are sniffed by their prefix.
    for path in std::env::args().skip(1) {
        match std::fs::read(&path) {
            Ok(mut data) => {
                data.truncate(MAGIC_MAX_LEN);
                print_verdict(&path, &data);
            }
            Err(err) => eprintln!("{path}: {err}"),
        }
    }
}

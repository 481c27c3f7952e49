use crate::config::RuntimeFiles;
use crate::translation::StaticRegistry;

pub const LINT_HEADER: &str = "#![allow(unknown_lints, unused_mut, unused_unsafe, unused_parens, bad_style, dead_code, unused_variables, static_mut_refs)]";

/// Value returned by `__syscall_read` once the input is exhausted.
pub const END_OF_INPUT: usize = 256;

/// Writes the runtime support appended to every translated program: the
/// three syscalls, the file handles behind them, the real `main`, and the
/// routine zeroing every static before `main_` runs.
pub struct PreludeWriter {
    output: String,
    indent: u32,
}

impl PreludeWriter {
    pub fn new() -> Self {
        PreludeWriter {
            output: String::new(),
            indent: 0,
        }
    }

    pub fn write(registry: &StaticRegistry, runtime: &RuntimeFiles) -> String {
        let mut writer = PreludeWriter::new();

        writer.writeln("");
        writer.write_exit();
        writer.write_read();
        writer.write_write();
        writer.write_handles();
        writer.write_main(runtime);
        writer.write_static_initializer(registry);

        writer.output
    }

    fn write_exit(&mut self) {
        self.writeln("");
        self.start_block("fn __syscall_exit(code: usize)");
        self.writeln("println!(\"Exit code: {}\", code);");
        self.writeln("std::process::exit(code as i32);");
        self.end_block();
    }

    fn write_read(&mut self) {
        self.writeln("");
        self.start_block("unsafe fn __syscall_read() -> usize");
        self.writeln("let mut buf = [0];");
        self.writeln("let amount_read = FILE_READER.as_mut().unwrap().read(&mut buf).expect(\"failed to read input file\");");
        self.start_block("if amount_read == 0");
        self.writeln(&END_OF_INPUT.to_string());
        self.end_block_with("} else {");
        self.indent += 1;
        self.writeln("usize::from(buf[0])");
        self.end_block();
        self.end_block();
    }

    fn write_write(&mut self) {
        self.writeln("");
        self.start_block("unsafe fn __syscall_write(byte: usize)");
        self.writeln("let buf = [byte as u8];");
        self.writeln("let writer = FILE_WRITER.as_mut().unwrap();");
        self.writeln("writer.write_all(&buf).expect(\"failed to write output file\");");
        self.writeln("writer.flush().expect(\"failed to flush output file\");");
        self.end_block();
    }

    fn write_handles(&mut self) {
        self.writeln("");
        self.writeln("use std::fs;");
        self.writeln("use std::io::prelude::*;");
        self.writeln("");
        self.writeln("static mut FILE_READER: Option<fs::File> = None;");
        self.writeln("static mut FILE_WRITER: Option<fs::File> = None;");
    }

    fn write_main(&mut self, runtime: &RuntimeFiles) {
        self.writeln("");
        self.start_block("fn main()");
        self.start_block("unsafe");
        self.writeln(&format!(
            "FILE_READER = Some(fs::File::open({:?}).expect(\"failed to open input file\"));",
            runtime.input
        ));
        self.writeln(&format!(
            "FILE_WRITER = Some(fs::File::create({:?}).expect(\"failed to create output file\"));",
            runtime.output
        ));
        self.writeln("init_statics();");
        self.writeln("main_();");
        self.end_block();
        self.end_block();
    }

    fn write_static_initializer(&mut self, registry: &StaticRegistry) {
        self.writeln("");
        self.start_block("unsafe fn init_statics()");
        for name in registry.names() {
            self.writeln(&format!("{} = Some(std::mem::zeroed());", name));
        }
        self.end_block();
    }

    fn start_block(&mut self, header: &str) {
        self.writeln(&format!("{} {{", header));
        self.indent += 1;
    }

    fn end_block(&mut self) {
        self.end_block_with("}");
    }

    fn end_block_with(&mut self, closing: &str) {
        self.indent -= 1;
        self.writeln(closing);
    }

    fn writeln(&mut self, line: &str) {
        if !line.is_empty() {
            let indent = (0..self.indent).map(|_| "    ").collect::<String>();
            self.output.push_str(&indent);
            self.output.push_str(line);
        }
        self.output.push('\n');
    }
}

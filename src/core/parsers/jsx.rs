use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedJsx {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Parse a JSX/TSX source string into an AST.
///
/// Accepts a shared `SourceMap` so callers can parse many files in parallel
/// while keeping line/column lookups consistent across the whole scan.
pub fn parse_jsx_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<ParsedJsx> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            decorators: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("failed to parse {file_path}: {e:?}"))?;

        Ok(ParsedJsx { module, source_map })
    })
}

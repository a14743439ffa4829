//! AST-based entry-point resolution.
//!
//! The candidate source is parsed with the engine's own parser and only
//! top-level items are inspected, so nested functions and string literals
//! that merely look like declarations are never matched. When several
//! candidate bindings exist, the first lexical occurrence wins.

use crate::error::ResolveError;
use boa_ast::declaration::{Binding, LexicalDeclaration, Variable};
use boa_ast::expression::Expression;
use boa_ast::{Declaration, Statement, StatementListItem};
use boa_interner::Interner;
use boa_parser::{Parser, Source};

/// Locate the candidate's entry point: the identifier of the first top-level
/// function declaration, or the first `const`/`let`/`var` binding whose
/// initializer is a function-like expression.
///
/// Source that does not parse cannot contain a recognizable entry point and
/// resolves to [`ResolveError::NoEntryPoint`] as well.
pub fn resolve_entry_point(source: &str) -> Result<String, ResolveError> {
    let mut interner = Interner::default();
    let mut parser = Parser::new(Source::from_bytes(source));
    let script = parser
        .parse_script(&mut interner)
        .map_err(|_| ResolveError::NoEntryPoint)?;

    for item in script.statements().statements() {
        let found = match item {
            StatementListItem::Declaration(decl) => declared_function_name(decl, &interner),
            StatementListItem::Statement(Statement::Var(var_decl)) => {
                bound_function_name(var_decl.0.as_ref(), &interner)
            }
            _ => None,
        };
        if let Some(name) = found {
            return Ok(name);
        }
    }

    Err(ResolveError::NoEntryPoint)
}

fn declared_function_name(decl: &Declaration, interner: &Interner) -> Option<String> {
    match decl {
        Declaration::Function(f) => resolve_ident(f.name(), interner),
        Declaration::AsyncFunction(f) => resolve_ident(f.name(), interner),
        Declaration::Generator(g) => resolve_ident(g.name(), interner),
        Declaration::AsyncGenerator(g) => resolve_ident(g.name(), interner),
        Declaration::Lexical(lexical) => {
            let list = match lexical {
                LexicalDeclaration::Const(list) | LexicalDeclaration::Let(list) => list,
            };
            bound_function_name(list.as_ref(), interner)
        }
        _ => None,
    }
}

fn bound_function_name(variables: &[Variable], interner: &Interner) -> Option<String> {
    for variable in variables {
        if let (Binding::Identifier(ident), Some(init)) = (variable.binding(), variable.init()) {
            if is_function_expression(init) {
                return resolve_ident(Some(*ident), interner);
            }
        }
    }
    None
}

fn resolve_ident(
    ident: Option<boa_ast::expression::Identifier>,
    interner: &Interner,
) -> Option<String> {
    ident.map(|i| interner.resolve_expect(i.sym()).to_string())
}

const fn is_function_expression(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Function(_)
            | Expression::ArrowFunction(_)
            | Expression::AsyncArrowFunction(_)
            | Expression::AsyncFunction(_)
            | Expression::Generator(_)
            | Expression::AsyncGenerator(_)
    )
}

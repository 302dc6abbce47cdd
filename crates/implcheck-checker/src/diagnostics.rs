//! Conversion of contract violations and hierarchy errors into diagnostics.

use crate::discovery::DiscoveredContract;
use crate::options::CheckerOptions;
use crate::violation::ContractViolation;
use implcheck_common::diagnostics::{diagnostic_codes, diagnostic_messages, format_message};
use implcheck_common::{Atom, Diagnostic};
use implcheck_graph::{DefId, DefinitionStore, TypeGraph};

fn file_name(store: &DefinitionStore, file: Option<Atom>) -> String {
    file.map(|atom| store.resolve(atom).to_string())
        .unwrap_or_default()
}

/// Build the diagnostic for a failed contract, located at the marked method.
pub fn violation_diagnostic(
    store: &DefinitionStore,
    contract: &DiscoveredContract,
    violation: &ContractViolation,
    options: &CheckerOptions,
) -> Diagnostic {
    let file = file_name(store, contract.file);
    let (start, length) = contract.span.unwrap_or((0, 0));

    let diagnostic = match violation {
        ContractViolation::NotAnInterface { .. } => Diagnostic::from_code(
            file,
            start,
            length,
            diagnostic_codes::MARKER_VALUE_MUST_BE_AN_INTERFACE,
            &[options.marker_name.as_str()],
        ),
        ContractViolation::DoesNotImplement {
            enclosing_name,
            interface_name,
            ..
        } => Diagnostic::from_code(
            file,
            start,
            length,
            diagnostic_codes::TYPE_MUST_IMPLEMENT_INTERFACE,
            &[enclosing_name.as_ref(), interface_name.as_ref()],
        ),
        ContractViolation::MissingMethod {
            interface_name,
            method,
            ..
        } => Diagnostic::from_code(
            file,
            start,
            length,
            diagnostic_codes::INTERFACE_DOES_NOT_HAVE_METHOD,
            &[interface_name.as_ref(), method.as_str()],
        ),
    };

    with_declaration(store, diagnostic, violation.target())
}

/// Attach "'X' is declared here." when the declaration of `def` has a location.
fn with_declaration(store: &DefinitionStore, diagnostic: Diagnostic, def: DefId) -> Diagnostic {
    let Some(info) = store.get(def) else {
        return diagnostic;
    };
    let (Some(file), Some((start, length))) = (info.file, info.span) else {
        return diagnostic;
    };
    let name = store.resolve(info.name);
    diagnostic.with_related(
        store.resolve(file).to_string(),
        start,
        length,
        format_message(diagnostic_messages::IS_DECLARED_HERE, &[name.as_ref()]),
    )
}

/// Diagnostic for a type whose base chain leads back to itself.
pub fn cycle_diagnostic(store: &DefinitionStore, def: DefId) -> Diagnostic {
    let (file, (start, length)) = match store.get(def) {
        Some(info) => (file_name(store, info.file), info.span.unwrap_or((0, 0))),
        None => (String::new(), (0, 0)),
    };
    Diagnostic::from_code(
        file,
        start,
        length,
        diagnostic_codes::CIRCULAR_BASE_REFERENCE,
        &[store.display_name(def).as_ref()],
    )
}

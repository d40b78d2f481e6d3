//! Printer for the destination syntax tree.
//!
//! Emits text with normalized whitespace: one declaration or statement per
//! line, braces on their own lines, four-space indentation, and a blank line
//! between members that span multiple lines. Formatting decisions live only
//! here; the converter never produces text.
//!
//! # Conventions
//!
//! Every `emit_*` method for a member or statement starts by writing the
//! current indentation and stops before the final newline, so callers decide
//! what separates consecutive nodes.

use crate::ast::*;

mod expressions;
mod statements;

pub use expressions::{escape_char, escape_string};

pub struct CSharpPrinter {
    output: String,
    indent_level: u32,
    indent_width: usize,
}

impl Default for CSharpPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl CSharpPrinter {
    pub fn new() -> Self {
        Self::with_indent_width(4)
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        CSharpPrinter {
            output: String::with_capacity(1024),
            indent_level: 0,
            indent_width,
        }
    }

    /// Print a whole compilation unit, ending with a newline.
    pub fn print_to_string(unit: &CompilationUnit) -> String {
        let mut printer = Self::new();
        printer.emit_compilation_unit(unit);
        printer.take_output()
    }

    pub fn expression_to_string(expr: &Expr) -> String {
        let mut printer = Self::new();
        printer.emit_expr(expr);
        printer.take_output()
    }

    pub fn statement_to_string(stmt: &Statement) -> String {
        let mut printer = Self::new();
        printer.emit_statement(stmt);
        printer.take_output()
    }

    pub fn member_to_string(member: &Member) -> String {
        let mut printer = Self::new();
        printer.emit_member(member);
        printer.take_output()
    }

    pub fn type_to_string(ty: &TypeSyntax) -> String {
        let mut printer = Self::new();
        printer.emit_type(ty);
        printer.take_output()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn take_output(self) -> String {
        self.output
    }

    // =========================================================================
    // Low-level writing
    // =========================================================================

    pub(crate) fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(crate) fn write_line(&mut self) {
        self.output.push('\n');
    }

    pub(crate) fn write_indent(&mut self) {
        let width = self.indent_level as usize * self.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    pub(crate) fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub(crate) fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_leading_comments(&mut self, comments: &[String]) {
        for comment in comments {
            self.write_indent();
            self.write(comment);
            self.write_line();
        }
    }

    fn write_trailing_comment(&mut self, comment: Option<&str>) {
        if let Some(comment) = comment {
            self.write(" ");
            self.write(comment);
        }
    }

    pub(crate) fn emit_modifiers(&mut self, modifiers: &[Modifier]) {
        for modifier in modifiers {
            self.write(modifier.keyword());
            self.write(" ");
        }
    }

    // =========================================================================
    // Compilation unit and members
    // =========================================================================

    pub fn emit_compilation_unit(&mut self, unit: &CompilationUnit) {
        for using in &unit.usings {
            self.write_indent();
            self.write("using ");
            if let Some(alias) = &using.alias {
                self.write(alias);
                self.write(" = ");
            }
            self.emit_name(&using.name);
            self.write(";");
            self.write_line();
        }
        if !unit.usings.is_empty() && (!unit.attributes.is_empty() || !unit.members.is_empty()) {
            self.write_line();
        }

        for list in &unit.attributes {
            self.write_indent();
            self.emit_attribute_list(list);
            self.write_line();
        }
        if !unit.attributes.is_empty() && !unit.members.is_empty() {
            self.write_line();
        }

        self.emit_members(&unit.members);
    }

    /// Emit members one per line, separating multi-line members with a
    /// blank line. Each member is followed by a newline.
    fn emit_members(&mut self, members: &[Member]) {
        let mut previous: Option<&Member> = None;
        for member in members {
            if let Some(prev) = previous
                && !(prev.is_single_line() && member.is_single_line())
            {
                self.write_line();
            }
            self.emit_member(member);
            self.write_line();
            previous = Some(member);
        }
    }

    /// Emit `{`, the members, and `}` on their own lines.
    fn emit_member_body(&mut self, members: &[Member]) {
        self.write_line();
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.emit_members(members);
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_attribute_lines(&mut self, attributes: &[AttributeList]) {
        for list in attributes {
            self.write_indent();
            self.emit_attribute_list(list);
            self.write_line();
        }
    }

    pub fn emit_member(&mut self, member: &Member) {
        match member {
            Member::Commented { trivia, member } => {
                self.write_leading_comments(&trivia.leading);
                self.emit_member(member);
                self.write_trailing_comment(trivia.trailing.as_deref());
            }
            Member::Namespace { name, members } => {
                self.write_indent();
                self.write("namespace ");
                self.emit_name(name);
                self.emit_member_body(members);
            }
            Member::Type(decl) => self.emit_type_declaration(decl),
            Member::Enum(decl) => self.emit_enum_declaration(decl),
            Member::Delegate(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.write("delegate ");
                self.emit_type(&decl.return_type);
                self.write(" ");
                self.write(&decl.identifier);
                self.emit_type_parameters(&decl.type_parameters);
                self.emit_parameter_list(&decl.parameters, "(", ")");
                self.emit_constraint_clauses(&decl.constraints);
                self.write(";");
            }
            Member::Field(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.emit_variable_declaration(&decl.declaration);
                self.write(";");
            }
            Member::EventField(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.write("event ");
                self.emit_variable_declaration(&decl.declaration);
                self.write(";");
            }
            Member::Event(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.write("event ");
                self.emit_type(&decl.ty);
                self.write(" ");
                self.write(&decl.identifier);
                self.emit_accessor_list(&decl.accessors);
            }
            Member::Property(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.emit_type(&decl.ty);
                self.write(" ");
                self.write(&decl.identifier);
                self.emit_accessor_list(&decl.accessors);
                if let Some(initializer) = &decl.initializer {
                    self.write(" = ");
                    self.emit_expr(initializer);
                    self.write(";");
                }
            }
            Member::Indexer(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.emit_type(&decl.ty);
                self.write(" this");
                self.emit_parameter_list(&decl.parameters, "[", "]");
                self.emit_accessor_list(&decl.accessors);
            }
            Member::Method(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.emit_type(&decl.return_type);
                self.write(" ");
                self.write(&decl.identifier);
                self.emit_type_parameters(&decl.type_parameters);
                self.emit_parameter_list(&decl.parameters, "(", ")");
                self.emit_constraint_clauses(&decl.constraints);
                match &decl.body {
                    Some(body) => self.emit_block_on_new_line(body),
                    None => self.write(";"),
                }
            }
            Member::Constructor(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.write(&decl.identifier);
                self.emit_parameter_list(&decl.parameters, "(", ")");
                if let Some(initializer) = &decl.initializer {
                    self.write(match initializer.kind {
                        ConstructorInitializerKind::Base => " : base(",
                        ConstructorInitializerKind::This => " : this(",
                    });
                    self.emit_arguments(&initializer.arguments);
                    self.write(")");
                }
                self.emit_block_on_new_line(&decl.body);
            }
            Member::Destructor(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.write("~");
                self.write(&decl.identifier);
                self.write("()");
                self.emit_block_on_new_line(&decl.body);
            }
            Member::Operator(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.emit_type(&decl.return_type);
                self.write(" operator ");
                self.write(decl.operator.token());
                self.emit_parameter_list(&decl.parameters, "(", ")");
                self.emit_block_on_new_line(&decl.body);
            }
            Member::ConversionOperator(decl) => {
                self.emit_attribute_lines(&decl.attributes);
                self.write_indent();
                self.emit_modifiers(&decl.modifiers);
                self.write("operator ");
                self.emit_type(&decl.ty);
                self.emit_parameter_list(&decl.parameters, "(", ")");
                self.emit_block_on_new_line(&decl.body);
            }
        }
    }

    fn emit_type_declaration(&mut self, decl: &TypeDeclaration) {
        self.emit_attribute_lines(&decl.attributes);
        self.write_indent();
        self.emit_modifiers(&decl.modifiers);
        self.write(decl.keyword.keyword());
        self.write(" ");
        self.write(&decl.identifier);
        self.emit_type_parameters(&decl.type_parameters);
        if !decl.base_list.is_empty() {
            self.write(" : ");
            for (i, base) in decl.base_list.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.emit_type(base);
            }
        }
        self.emit_constraint_clauses(&decl.constraints);
        self.emit_member_body(&decl.members);
    }

    fn emit_enum_declaration(&mut self, decl: &EnumDeclaration) {
        self.emit_attribute_lines(&decl.attributes);
        self.write_indent();
        self.emit_modifiers(&decl.modifiers);
        self.write("enum ");
        self.write(&decl.identifier);
        if let Some(base) = &decl.base_type {
            self.write(" : ");
            self.emit_type(base);
        }
        self.write_line();
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();
        let count = decl.members.len();
        for (i, member) in decl.members.iter().enumerate() {
            self.write_leading_comments(&member.trivia.leading);
            for list in &member.attributes {
                self.write_indent();
                self.emit_attribute_list(list);
                self.write_line();
            }
            self.write_indent();
            self.write(&member.identifier);
            if let Some(value) = &member.value {
                self.write(" = ");
                self.emit_expr(value);
            }
            if i + 1 < count {
                self.write(",");
            }
            self.write_trailing_comment(member.trivia.trailing.as_deref());
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    /// `{ get; set; }` on one line when every accessor is auto-implemented,
    /// otherwise one accessor per line with bodies.
    fn emit_accessor_list(&mut self, accessors: &[Accessor]) {
        let all_auto = accessors
            .iter()
            .all(|a| a.body.is_none() && a.attributes.is_empty());
        if all_auto {
            self.write(" {");
            for accessor in accessors {
                self.write(" ");
                self.emit_modifiers(&accessor.modifiers);
                self.write(accessor.kind.keyword());
                self.write(";");
            }
            self.write(" }");
            return;
        }

        self.write_line();
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();
        for accessor in accessors {
            self.emit_attribute_lines(&accessor.attributes);
            self.write_indent();
            self.emit_modifiers(&accessor.modifiers);
            self.write(accessor.kind.keyword());
            match &accessor.body {
                Some(body) => self.emit_block_on_new_line(body),
                None => self.write(";"),
            }
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(crate) fn emit_attribute_list(&mut self, list: &AttributeList) {
        self.write("[");
        if let Some(target) = list.target {
            self.write(match target {
                AttributeTarget::Assembly => "assembly: ",
                AttributeTarget::Module => "module: ",
                AttributeTarget::Return => "return: ",
            });
        }
        for (i, attribute) in list.attributes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_name(&attribute.name);
            if !attribute.arguments.is_empty() {
                self.write("(");
                for (j, argument) in attribute.arguments.iter().enumerate() {
                    if j > 0 {
                        self.write(", ");
                    }
                    if let Some(name) = &argument.name_equals {
                        self.write(name);
                        self.write(" = ");
                    }
                    self.emit_expr(&argument.expression);
                }
                self.write(")");
            }
        }
        self.write("]");
    }

    fn emit_type_parameters(&mut self, type_parameters: &[TypeParameter]) {
        if type_parameters.is_empty() {
            return;
        }
        self.write("<");
        for (i, parameter) in type_parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            match parameter.variance {
                Some(Variance::In) => self.write("in "),
                Some(Variance::Out) => self.write("out "),
                None => {}
            }
            self.write(&parameter.identifier);
        }
        self.write(">");
    }

    fn emit_constraint_clauses(&mut self, clauses: &[ConstraintClause]) {
        for clause in clauses {
            self.write(" where ");
            self.write(&clause.type_parameter);
            self.write(" : ");
            for (i, constraint) in clause.constraints.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                match constraint {
                    TypeConstraint::Class => self.write("class"),
                    TypeConstraint::Struct => self.write("struct"),
                    TypeConstraint::Constructor => self.write("new()"),
                    TypeConstraint::Type(ty) => self.emit_type(ty),
                }
            }
        }
    }

    pub(crate) fn emit_parameter_list(&mut self, parameters: &[Parameter], open: &str, close: &str) {
        self.write(open);
        for (i, parameter) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_parameter(parameter);
        }
        self.write(close);
    }

    pub(crate) fn emit_parameter(&mut self, parameter: &Parameter) {
        for list in &parameter.attributes {
            self.emit_attribute_list(list);
            self.write(" ");
        }
        self.emit_modifiers(&parameter.modifiers);
        if let Some(ty) = &parameter.ty {
            self.emit_type(ty);
            self.write(" ");
        }
        self.write(&parameter.identifier);
        if let Some(default) = &parameter.default {
            self.write(" = ");
            self.emit_expr(default);
        }
    }

    pub(crate) fn emit_variable_declaration(&mut self, declaration: &VariableDeclaration) {
        self.emit_type(&declaration.ty);
        self.write(" ");
        for (i, variable) in declaration.variables.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&variable.identifier);
            if let Some(initializer) = &variable.initializer {
                self.write(" = ");
                self.emit_expr(initializer);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod tests;

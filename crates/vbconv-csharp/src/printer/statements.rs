//! Statement emission for `CSharpPrinter`.

use super::*;

impl CSharpPrinter {
    /// `{`, one statement per line, `}` starting at the current position.
    pub(crate) fn emit_block_body(&mut self, statements: &[Statement]) {
        self.write("{");
        self.write_line();
        self.increase_indent();
        for statement in statements {
            self.emit_statement(statement);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    pub(crate) fn emit_block_on_new_line(&mut self, statements: &[Statement]) {
        self.write_line();
        self.write_indent();
        self.emit_block_body(statements);
    }

    /// Body of `if`/`while`/`for`: blocks go on the next line at the same
    /// level, single statements on the next line one level deeper.
    fn emit_embedded(&mut self, statement: &Statement) {
        if let Statement::Block(statements) = statement {
            self.emit_block_on_new_line(statements);
            return;
        }
        self.write_line();
        self.increase_indent();
        self.emit_statement(statement);
        self.decrease_indent();
    }

    pub fn emit_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Commented { trivia, statement } => {
                self.write_leading_comments(&trivia.leading);
                self.emit_statement(statement);
                self.write_trailing_comment(trivia.trailing.as_deref());
            }
            other => {
                self.write_indent();
                self.emit_statement_inline(other);
            }
        }
    }

    /// Emit a statement whose indentation has already been written.
    fn emit_statement_inline(&mut self, statement: &Statement) {
        match statement {
            Statement::Commented { trivia, statement } => {
                // Leading comments cannot sit in the middle of a line; move
                // them behind the statement instead.
                self.emit_statement_inline(statement);
                for comment in &trivia.leading {
                    self.write(" ");
                    self.write_inline_comment(comment);
                }
                self.write_trailing_comment(trivia.trailing.as_deref());
            }
            Statement::LocalDeclaration {
                modifiers,
                declaration,
            } => {
                self.emit_modifiers(modifiers);
                self.emit_variable_declaration(declaration);
                self.write(";");
            }
            Statement::Expression(expr) => {
                self.emit_expr(expr);
                self.write(";");
            }
            Statement::Block(statements) => self.emit_block_body(statements),
            Statement::Return(expr) => {
                self.write("return");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_expr(expr);
                }
                self.write(";");
            }
            Statement::YieldReturn(expr) => {
                self.write("yield return ");
                self.emit_expr(expr);
                self.write(";");
            }
            Statement::YieldBreak => self.write("yield break;"),
            Statement::Break => self.write("break;"),
            Statement::Continue => self.write("continue;"),
            Statement::Throw(expr) => {
                self.write("throw");
                if let Some(expr) = expr {
                    self.write(" ");
                    self.emit_expr(expr);
                }
                self.write(";");
            }
            Statement::If {
                condition,
                statement,
                else_clause,
            } => {
                self.write("if (");
                self.emit_expr(condition);
                self.write(")");
                self.emit_embedded(statement);
                if let Some(else_clause) = else_clause {
                    self.write_line();
                    self.write_indent();
                    self.write("else");
                    if matches!(else_clause.as_ref(), Statement::If { .. }) {
                        self.write(" ");
                        self.emit_statement_inline(else_clause);
                    } else {
                        self.emit_embedded(else_clause);
                    }
                }
            }
            Statement::For {
                declaration,
                initializers,
                condition,
                incrementors,
                statement,
            } => {
                self.write("for (");
                if let Some(declaration) = declaration {
                    self.emit_variable_declaration(declaration);
                } else {
                    self.emit_comma_separated(initializers);
                }
                self.write(";");
                if let Some(condition) = condition {
                    self.write(" ");
                    self.emit_expr(condition);
                }
                self.write(";");
                if !incrementors.is_empty() {
                    self.write(" ");
                    self.emit_comma_separated(incrementors);
                }
                self.write(")");
                self.emit_embedded(statement);
            }
            Statement::ForEach {
                ty,
                identifier,
                expression,
                statement,
            } => {
                self.write("foreach (");
                self.emit_type(ty);
                self.write(" ");
                self.write(identifier);
                self.write(" in ");
                self.emit_expr(expression);
                self.write(")");
                self.emit_embedded(statement);
            }
            Statement::While {
                condition,
                statement,
            } => {
                self.write("while (");
                self.emit_expr(condition);
                self.write(")");
                self.emit_embedded(statement);
            }
            Statement::Do {
                statement,
                condition,
            } => {
                self.write("do");
                self.emit_embedded(statement);
                self.write_line();
                self.write_indent();
                self.write("while (");
                self.emit_expr(condition);
                self.write(");");
            }
            Statement::Switch {
                expression,
                sections,
            } => {
                self.write("switch (");
                self.emit_expr(expression);
                self.write(")");
                self.write_line();
                self.write_indent();
                self.write("{");
                self.write_line();
                self.increase_indent();
                for section in sections {
                    for label in &section.labels {
                        self.write_indent();
                        match label {
                            SwitchLabel::Case(value) => {
                                self.write("case ");
                                self.emit_expr(value);
                                self.write(":");
                            }
                            SwitchLabel::Default => self.write("default:"),
                        }
                        self.write_line();
                    }
                    self.increase_indent();
                    for statement in &section.statements {
                        self.emit_statement(statement);
                        self.write_line();
                    }
                    self.decrease_indent();
                }
                self.decrease_indent();
                self.write_indent();
                self.write("}");
            }
            Statement::Try {
                block,
                catches,
                finally,
            } => {
                self.write("try");
                self.emit_block_on_new_line(block);
                for catch in catches {
                    self.write_line();
                    self.write_indent();
                    self.write("catch");
                    if let Some(declaration) = &catch.declaration {
                        self.write(" (");
                        self.emit_type(&declaration.ty);
                        if let Some(identifier) = &declaration.identifier {
                            self.write(" ");
                            self.write(identifier);
                        }
                        self.write(")");
                    }
                    if let Some(filter) = &catch.filter {
                        self.write(" when (");
                        self.emit_expr(filter);
                        self.write(")");
                    }
                    self.emit_block_on_new_line(&catch.block);
                }
                if let Some(finally) = finally {
                    self.write_line();
                    self.write_indent();
                    self.write("finally");
                    self.emit_block_on_new_line(finally);
                }
            }
            Statement::Lock {
                expression,
                statement,
            } => {
                self.write("lock (");
                self.emit_expr(expression);
                self.write(")");
                self.emit_embedded(statement);
            }
            Statement::Using {
                declaration,
                expression,
                statement,
            } => {
                self.write("using (");
                if let Some(declaration) = declaration {
                    self.emit_variable_declaration(declaration);
                } else if let Some(expression) = expression {
                    self.emit_expr(expression);
                }
                self.write(")");
                // Nested usings stack at the same level.
                if matches!(statement.as_ref(), Statement::Using { .. }) {
                    self.write_line();
                    self.write_indent();
                    self.emit_statement_inline(statement);
                } else {
                    self.emit_embedded(statement);
                }
            }
            Statement::Empty => self.write(";"),
        }
    }

    fn write_inline_comment(&mut self, comment: &str) {
        if let Some(text) = comment.strip_prefix("//") {
            self.write("/*");
            self.write(text.trim_start_matches('/'));
            self.write(" */");
        } else {
            self.write(comment);
        }
    }
}

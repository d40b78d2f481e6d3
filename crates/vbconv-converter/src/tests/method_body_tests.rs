use super::*;
use crate::options::ConvertOptions;
use vbconv_csharp::CSharpPrinter;
use vbconv_semantic::{ConstantValue, SemanticTable, SpecialType, Symbol, SymbolKind, TypeKind, TypeSymbol};
use vbconv_syntax::{
    BlockKind, CaseBlock, CaseClause, CatchBlock, ElseIfBlock, ForControl, LoopCondition,
    LoopConditionKind, PredefinedType, StatementKind, SyntaxBuilder, UnaryOperator, UsingResource,
};

fn convert_in(
    table: &SemanticTable,
    body: EnclosingBody,
    is_iterator: bool,
    statements: &[vb::Statement],
) -> ConversionResult<String> {
    let mut nodes = NodesVisitor::new(table, ConvertOptions::default());
    let converted = MethodBodyVisitor::new(&mut nodes, body, is_iterator).convert_statements(statements)?;
    Ok(converted
        .iter()
        .map(CSharpPrinter::statement_to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

fn convert(statements: &[vb::Statement]) -> String {
    convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, statements).unwrap()
}

fn for_loop(b: &SyntaxBuilder, control: ForControl, step: Option<vb::Expr>) -> vb::Statement {
    b.stmt(StatementKind::For {
        control,
        from: b.int(1),
        to: b.int(5),
        step,
        statements: Vec::new(),
    })
}

fn counter(b: &SyntaxBuilder) -> ForControl {
    ForControl::Variable {
        expression: b.ident("i"),
    }
}

// =============================================================================
// For
// =============================================================================

#[test]
fn for_declares_fresh_counter() {
    let b = SyntaxBuilder::new();
    let output = convert(&[for_loop(&b, counter(&b), None)]);
    assert_eq!(output, "for (var i = 1; i <= 5; i++)\n{\n}");
}

#[test]
fn for_with_typed_declarator() {
    let b = SyntaxBuilder::new();
    let control = ForControl::Declarator {
        declarator: b.declarator("i", Some(b.predefined(PredefinedType::Integer)), None),
    };
    let output = convert(&[for_loop(&b, control, None)]);
    assert!(output.starts_with("for (int i = 1; i <= 5; i++)"), "{output}");
}

#[test]
fn negated_step_counts_down() {
    let b = SyntaxBuilder::new();
    let step = b.unary(UnaryOperator::Minus, b.int(1));
    let output = convert(&[for_loop(&b, counter(&b), Some(step))]);
    assert!(output.starts_with("for (var i = 1; i >= 5; i += -1)"), "{output}");
}

#[test]
fn parenthesized_negated_step_counts_down() {
    let b = SyntaxBuilder::new();
    let step = b.paren(b.unary(UnaryOperator::Minus, b.ident("delta")));
    let output = convert(&[for_loop(&b, counter(&b), Some(step))]);
    assert!(output.contains("i >= 5"), "{output}");
}

#[test]
fn negative_constant_step_counts_down() {
    let b = SyntaxBuilder::new();
    let step = b.ident("Down");
    let mut table = SemanticTable::new();
    table.set_constant(step.id(), ConstantValue::Integer(-2));
    let statement = for_loop(&b, counter(&b), Some(step));
    let output = convert_in(&table, EnclosingBody::Procedure, false, &[statement]).unwrap();
    assert!(output.contains("i >= 5; i += Down"), "{output}");
}

#[test]
fn positive_step_counts_up() {
    let b = SyntaxBuilder::new();
    let output = convert(&[for_loop(&b, counter(&b), Some(b.int(2)))]);
    assert!(output.contains("i <= 5; i += 2"), "{output}");
}

#[test]
fn counter_in_scope_is_assigned() {
    let b = SyntaxBuilder::new();
    let statement = for_loop(&b, counter(&b), None);
    let mut table = SemanticTable::new();
    table.add_names_in_scope(statement.id, ["I"]);
    let output = convert_in(&table, EnclosingBody::Procedure, false, &[statement]).unwrap();
    assert!(output.starts_with("for (i = 1; i <= 5; i++)"), "{output}");
}

#[test]
fn for_each_typed_and_inferred() {
    let b = SyntaxBuilder::new();
    let typed = b.stmt(StatementKind::ForEach {
        control: ForControl::Declarator {
            declarator: b.declarator("item", Some(b.predefined(PredefinedType::String)), None),
        },
        expression: b.ident("items"),
        statements: vec![b.expr_stmt(b.invoke(b.ident("Print"), vec![b.ident("item")]))],
    });
    let inferred = b.stmt(StatementKind::ForEach {
        control: ForControl::Variable {
            expression: b.ident("item"),
        },
        expression: b.ident("items"),
        statements: Vec::new(),
    });
    let output = convert(&[typed, inferred]);
    assert!(output.contains("foreach (string item in items)\n    Print(item);"), "{output}");
    assert!(output.contains("foreach (var item in items)"), "{output}");
}

// =============================================================================
// While and Do
// =============================================================================

#[test]
fn do_loop_forms() {
    let b = SyntaxBuilder::new();
    let until_bottom = b.stmt(StatementKind::DoLoop {
        top_condition: None,
        bottom_condition: Some(LoopCondition {
            kind: LoopConditionKind::Until,
            condition: b.ident("done"),
        }),
        statements: Vec::new(),
    });
    let while_top = b.stmt(StatementKind::DoLoop {
        top_condition: Some(LoopCondition {
            kind: LoopConditionKind::While,
            condition: b.ident("running"),
        }),
        bottom_condition: None,
        statements: Vec::new(),
    });
    let bare = b.stmt(StatementKind::DoLoop {
        top_condition: None,
        bottom_condition: None,
        statements: vec![b.stmt(StatementKind::Exit { block: BlockKind::Do })],
    });

    assert_eq!(convert(&[until_bottom]), "do\n{\n}\nwhile (!done);");
    assert_eq!(convert(&[while_top]), "while (running)\n{\n}");
    assert_eq!(convert(&[bare]), "while (true)\n    break;");
}

// =============================================================================
// Select Case
// =============================================================================

#[test]
fn select_sections_end_in_break() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![
            CaseBlock {
                clauses: vec![
                    CaseClause::Simple { value: b.int(1) },
                    CaseClause::Simple { value: b.int(2) },
                ],
                statements: vec![b.expr_stmt(b.invoke(b.ident("Low"), Vec::new()))],
                trivia: Default::default(),
            },
            CaseBlock {
                clauses: vec![CaseClause::Else],
                statements: Vec::new(),
                trivia: Default::default(),
            },
        ],
    });
    let output = convert(&[statement]);
    assert!(output.contains("    case 1:\n    case 2:\n        Low();\n        break;"), "{output}");
    assert!(output.contains("    default:\n        break;"), "{output}");
    assert_eq!(output.matches("break;").count(), 2);
}

#[test]
fn select_section_that_already_jumps_gets_no_extra_break() {
    let b = SyntaxBuilder::new();
    let leave = b.stmt(StatementKind::Exit { block: BlockKind::Select });
    let give_up = b.stmt(StatementKind::Return { expression: None });
    let statement = b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![
            CaseBlock {
                clauses: vec![CaseClause::Simple { value: b.int(1) }],
                statements: vec![leave],
                trivia: Default::default(),
            },
            CaseBlock {
                clauses: vec![CaseClause::Else],
                statements: vec![give_up],
                trivia: Default::default(),
            },
        ],
    });
    let output = convert(&[statement]);
    assert!(output.contains("    case 1:\n        break;\n    default:\n        return;\n}"), "{output}");
    assert_eq!(output.matches("break;").count(), 1);
}

#[test]
fn select_section_with_local_gets_braces() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![CaseBlock {
            clauses: vec![CaseClause::Simple { value: b.int(1) }],
            statements: vec![b.dim("x", Some(b.predefined(PredefinedType::Integer)), None)],
            trivia: Default::default(),
        }],
    });
    let output = convert(&[statement]);
    assert!(output.contains("    case 1:\n        {\n            int x;\n            break;\n        }"), "{output}");
}

#[test]
fn relational_and_range_clauses_are_unsupported() {
    let b = SyntaxBuilder::new();
    let relational = b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![CaseBlock {
            clauses: vec![CaseClause::Relational {
                operator: vb::BinaryOperator::GreaterThan,
                value: b.int(5),
            }],
            statements: Vec::new(),
            trivia: Default::default(),
        }],
    });
    let range = b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![CaseBlock {
            clauses: vec![CaseClause::Range {
                lower: b.int(1),
                upper: b.int(3),
            }],
            statements: Vec::new(),
            trivia: Default::default(),
        }],
    });
    let table = SemanticTable::new();
    let error = convert_in(&table, EnclosingBody::Procedure, false, &[relational]).unwrap_err();
    assert_eq!(error.kind(), "RelationalCaseClause");
    let error = convert_in(&table, EnclosingBody::Procedure, false, &[range]).unwrap_err();
    assert_eq!(error.kind(), "RangeCaseClause");
}

// =============================================================================
// With
// =============================================================================

fn with_block(b: &SyntaxBuilder, target: vb::Expr, statements: Vec<vb::Statement>) -> vb::Statement {
    b.stmt(StatementKind::With {
        expression: target,
        statements,
    })
}

#[test]
fn with_block_introduces_one_temporary() {
    let b = SyntaxBuilder::new();
    let statement = with_block(
        &b,
        b.invoke(b.ident("Create"), Vec::new()),
        vec![
            b.expr_stmt(b.invoke(b.implicit_member("Open"), Vec::new())),
            b.stmt(StatementKind::Assignment {
                operator: vb::AssignmentOperator::Simple,
                left: b.implicit_member("Name"),
                right: b.string("x"),
            }),
        ],
    );
    let output = convert(&[statement]);
    assert_eq!(
        output,
        "{\n    var withBlock = Create();\n    withBlock.Open();\n    withBlock.Name = \"x\";\n}"
    );
}

#[test]
fn with_temporary_avoids_visible_names() {
    let b = SyntaxBuilder::new();
    let inner = b.expr_stmt(b.invoke(b.implicit_member("Open"), Vec::new()));
    let mut table = SemanticTable::new();
    table.add_names_in_scope(inner.id, ["withBlock", "withBlock1"]);
    let statement = with_block(&b, b.ident("target"), vec![inner]);
    let output = convert_in(&table, EnclosingBody::Procedure, false, &[statement]).unwrap();
    assert!(output.contains("var withBlock2 = target;"), "{output}");
    assert!(output.contains("withBlock2.Open();"), "{output}");
}

#[test]
fn nested_with_blocks_use_innermost_temporary() {
    let b = SyntaxBuilder::new();
    let inner = with_block(
        &b,
        b.implicit_member("Child"),
        vec![b.expr_stmt(b.invoke(b.implicit_member("Open"), Vec::new()))],
    );
    let after = b.expr_stmt(b.invoke(b.implicit_member("Close"), Vec::new()));
    let outer = with_block(&b, b.ident("root"), vec![inner, after]);
    let output = convert(&[outer]);
    assert!(output.contains("var withBlock = root;"), "{output}");
    assert!(output.contains("var withBlock1 = withBlock.Child;"), "{output}");
    assert!(output.contains("withBlock1.Open();"), "{output}");
    assert!(output.contains("withBlock.Close();"), "{output}");
}

#[test]
fn receiver_stack_is_balanced_after_failure() {
    let b = SyntaxBuilder::new();
    let statement = with_block(
        &b,
        b.ident("target"),
        vec![b.stmt(StatementKind::GoTo {
            label: "Retry".to_string(),
        })],
    );
    let table = SemanticTable::new();
    let mut nodes = NodesVisitor::new(&table, ConvertOptions::default());
    let result = MethodBodyVisitor::new(&mut nodes, EnclosingBody::Procedure, false).convert_statement(&statement);
    assert_eq!(
        result.unwrap_err(),
        ConversionError::unimplemented("GoToStatement")
    );
    assert_eq!(nodes.receivers().depth(), 0);
}

// =============================================================================
// Return and Exit
// =============================================================================

fn exit(b: &SyntaxBuilder, block: BlockKind) -> vb::Statement {
    b.stmt(StatementKind::Exit { block })
}

#[test]
fn exit_function_returns_default_value() {
    let b = SyntaxBuilder::new();
    let table = SemanticTable::new();
    let int_body = EnclosingBody::Function {
        return_type: Some(TypeSymbol::special(SpecialType::Int32)),
    };
    let string_body = EnclosingBody::Function {
        return_type: Some(TypeSymbol::special(SpecialType::String)),
    };
    let unknown_body = EnclosingBody::Function { return_type: None };

    let statement = [exit(&b, BlockKind::Function)];
    assert_eq!(
        convert_in(&table, int_body, false, &statement).unwrap(),
        "return default(int);"
    );
    assert_eq!(
        convert_in(&table, string_body, false, &statement).unwrap(),
        "return null;"
    );
    assert!(
        convert_in(&table, unknown_body, false, &statement)
            .unwrap()
            .starts_with("return null /* TODO")
    );
}

#[test]
fn exit_function_with_unnameable_type_is_unsupported() {
    let b = SyntaxBuilder::new();
    let mut anonymous = TypeSymbol::named("<anonymous>", TypeKind::Struct);
    anonymous.can_be_referenced_by_name = false;
    let body = EnclosingBody::Function {
        return_type: Some(anonymous),
    };
    let error = convert_in(&SemanticTable::new(), body, false, &[exit(&b, BlockKind::Function)]).unwrap_err();
    assert_eq!(error.kind(), "ExitStatement");
}

#[test]
fn exit_by_enclosing_kind() {
    let b = SyntaxBuilder::new();
    let table = SemanticTable::new();
    let getter = EnclosingBody::Getter {
        property_type: Some(TypeSymbol::named("Point", TypeKind::Struct)),
    };
    assert_eq!(convert(&[exit(&b, BlockKind::Sub)]), "return;");
    assert_eq!(
        convert(&[for_body(&b, vec![exit(&b, BlockKind::For)])]),
        "for (var i = 1; i <= 5; i++)\n    break;"
    );
    assert_eq!(
        convert_in(&table, getter, false, &[exit(&b, BlockKind::Property)]).unwrap(),
        "return default(Point);"
    );
    assert_eq!(
        convert_in(&table, EnclosingBody::Setter, false, &[exit(&b, BlockKind::Property)]).unwrap(),
        "return;"
    );
    let error = convert_in(&table, EnclosingBody::Procedure, false, &[exit(&b, BlockKind::Try)]).unwrap_err();
    assert_eq!(error.kind(), "ExitTryStatement");
}

fn for_body(b: &SyntaxBuilder, statements: Vec<vb::Statement>) -> vb::Statement {
    b.stmt(StatementKind::For {
        control: counter(b),
        from: b.int(1),
        to: b.int(5),
        step: None,
        statements,
    })
}

fn select_body(b: &SyntaxBuilder, statements: Vec<vb::Statement>) -> vb::Statement {
    b.stmt(StatementKind::Select {
        expression: b.ident("code"),
        case_blocks: vec![CaseBlock {
            clauses: vec![CaseClause::Simple { value: b.int(1) }],
            statements,
            trivia: Default::default(),
        }],
    })
}

#[test]
fn exit_for_from_inside_select_is_unsupported() {
    let b = SyntaxBuilder::new();
    let after = b.expr_stmt(b.invoke(b.ident("After"), Vec::new()));
    let statement = for_body(&b, vec![select_body(&b, vec![exit(&b, BlockKind::For)]), after]);
    let error = convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, &[statement]).unwrap_err();
    assert_eq!(error.kind(), "ExitStatement");
    assert!(error.to_string().contains("enclosing Select"), "{error}");
}

#[test]
fn exit_do_from_nested_for_is_unsupported() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::DoLoop {
        top_condition: None,
        bottom_condition: None,
        statements: vec![for_body(&b, vec![exit(&b, BlockKind::Do)])],
    });
    let error = convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, &[statement]).unwrap_err();
    assert_eq!(error.kind(), "ExitStatement");
}

#[test]
fn exit_outside_its_block_is_unsupported() {
    let b = SyntaxBuilder::new();
    let table = SemanticTable::new();
    for block in [BlockKind::For, BlockKind::Select] {
        let error = convert_in(&table, EnclosingBody::Procedure, false, &[exit(&b, block)]).unwrap_err();
        assert_eq!(error.kind(), "ExitStatement");
    }
}

#[test]
fn exit_targets_close_again_after_the_loop() {
    let b = SyntaxBuilder::new();
    let statements = [for_body(&b, Vec::new()), exit(&b, BlockKind::For)];
    let error = convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, &statements).unwrap_err();
    assert_eq!(error.kind(), "ExitStatement");
}

#[test]
fn continue_passes_through_select_to_its_loop() {
    let b = SyntaxBuilder::new();
    let proceed = b.stmt(StatementKind::Continue { block: BlockKind::For });
    let output = convert(&[for_body(&b, vec![select_body(&b, vec![proceed])])]);
    assert!(output.contains("case 1:\n"), "{output}");
    assert!(output.contains("continue;"), "{output}");
    assert!(!output.contains("break;"), "{output}");
}

#[test]
fn continue_naming_an_outer_loop_is_unsupported() {
    let b = SyntaxBuilder::new();
    let proceed = b.stmt(StatementKind::Continue { block: BlockKind::While });
    let statement = b.stmt(StatementKind::While {
        condition: b.ident("running"),
        statements: vec![for_body(&b, vec![proceed])],
    });
    let error = convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, &[statement]).unwrap_err();
    assert_eq!(error.kind(), "ContinueStatement");
}

#[test]
fn iterator_bodies_stop_with_yield_break() {
    let b = SyntaxBuilder::new();
    let table = SemanticTable::new();
    let body = EnclosingBody::Function {
        return_type: Some(TypeSymbol::named("IEnumerable<int>", TypeKind::Interface)),
    };
    let statements = [
        b.stmt(StatementKind::Yield { expression: b.int(1) }),
        b.stmt(StatementKind::Return { expression: None }),
        exit(&b, BlockKind::Function),
    ];
    assert_eq!(
        convert_in(&table, body, true, &statements).unwrap(),
        "yield return 1;\nyield break;\nyield break;"
    );
}

// =============================================================================
// If
// =============================================================================

#[test]
fn else_if_chain_stays_flat() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::MultiLineIf {
        condition: b.ident("a"),
        statements: vec![b.expr_stmt(b.invoke(b.ident("One"), Vec::new()))],
        else_if_blocks: vec![ElseIfBlock {
            condition: b.ident("b"),
            statements: vec![b.expr_stmt(b.invoke(b.ident("Two"), Vec::new()))],
            trivia: Default::default(),
        }],
        else_statements: Some(vec![b.expr_stmt(b.invoke(b.ident("Three"), Vec::new()))]),
    });
    assert_eq!(
        convert(&[statement]),
        "if (a)\n    One();\nelse if (b)\n    Two();\nelse\n    Three();"
    );
}

#[test]
fn else_if_comments_move_into_the_branch() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::MultiLineIf {
        condition: b.ident("a"),
        statements: Vec::new(),
        else_if_blocks: vec![ElseIfBlock {
            condition: b.ident("b"),
            statements: vec![b.expr_stmt(b.invoke(b.ident("Two"), Vec::new()))],
            trivia: vb::Trivia {
                leading: vec!["' second case".to_string()],
                trailing: None,
            },
        }],
        else_statements: None,
    });
    let output = convert(&[statement]);
    assert!(output.contains("else if (b)\n{\n    // second case\n    Two();\n}"), "{output}");
}

#[test]
fn nested_if_is_braced_when_an_else_follows() {
    let b = SyntaxBuilder::new();
    let inner = b.stmt(StatementKind::SingleLineIf {
        condition: b.ident("b"),
        statements: vec![b.expr_stmt(b.invoke(b.ident("Two"), Vec::new()))],
        else_statements: None,
    });
    let outer = b.stmt(StatementKind::SingleLineIf {
        condition: b.ident("a"),
        statements: vec![inner],
        else_statements: Some(vec![b.expr_stmt(b.invoke(b.ident("Three"), Vec::new()))]),
    });
    let output = convert(&[outer]);
    assert!(output.starts_with("if (a)\n{\n    if (b)"), "{output}");
}

// =============================================================================
// Try, SyncLock, Using
// =============================================================================

#[test]
fn try_catch_with_filter_and_finally() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::Try {
        statements: vec![b.expr_stmt(b.invoke(b.ident("Work"), Vec::new()))],
        catch_blocks: vec![
            CatchBlock {
                id: b.next_id(),
                identifier: Some("ex".to_string()),
                as_type: Some(b.named_type("IOException")),
                filter: Some(b.ident("retry")),
                statements: Vec::new(),
                trivia: Default::default(),
            },
            CatchBlock {
                id: b.next_id(),
                identifier: None,
                as_type: None,
                filter: None,
                statements: vec![b.stmt(StatementKind::Throw { expression: None })],
                trivia: Default::default(),
            },
        ],
        finally_statements: Some(vec![b.expr_stmt(b.invoke(b.ident("Cleanup"), Vec::new()))]),
    });
    let output = convert(&[statement]);
    assert_eq!(
        output,
        "try\n{\n    Work();\n}\ncatch (IOException ex) when (retry)\n{\n}\ncatch\n{\n    throw;\n}\nfinally\n{\n    Cleanup();\n}"
    );
}

#[test]
fn catch_variable_without_type_defaults_to_exception() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::Try {
        statements: Vec::new(),
        catch_blocks: vec![CatchBlock {
            id: b.next_id(),
            identifier: Some("ex".to_string()),
            as_type: None,
            filter: None,
            statements: Vec::new(),
            trivia: Default::default(),
        }],
        finally_statements: None,
    });
    assert!(convert(&[statement]).contains("catch (System.Exception ex)"));
}

#[test]
fn using_nests_first_resource_outermost() {
    let b = SyntaxBuilder::new();
    let declarator = |name: &str, ty: &str| vb::VariableDeclarator {
        names: vec![b.modified_identifier(name)],
        as_clause: Some(vb::AsClause::New {
            creation: b.new_object(b.named_type(ty), None),
        }),
        initializer: None,
    };
    let statement = b.stmt(StatementKind::Using {
        resource: UsingResource::Variables {
            declarators: vec![declarator("a", "Reader"), declarator("b", "Writer")],
        },
        statements: vec![b.expr_stmt(b.invoke(b.ident("Copy"), Vec::new()))],
    });
    assert_eq!(
        convert(&[statement]),
        "using (Reader a = new Reader())\nusing (Writer b = new Writer())\n{\n    Copy();\n}"
    );
}

#[test]
fn using_expression_and_sync_lock() {
    let b = SyntaxBuilder::new();
    let using = b.stmt(StatementKind::Using {
        resource: UsingResource::Expression {
            expression: b.ident("stream"),
        },
        statements: Vec::new(),
    });
    let lock = b.stmt(StatementKind::SyncLock {
        expression: b.ident("gate"),
        statements: Vec::new(),
    });
    assert_eq!(convert(&[using]), "using (stream)\n{\n}");
    assert_eq!(convert(&[lock]), "lock (gate)\n{\n}");
}

// =============================================================================
// Events, declarations, and simple statements
// =============================================================================

#[test]
fn events_use_invoke_and_compound_assignment() {
    let b = SyntaxBuilder::new();
    let raise = b.stmt(StatementKind::RaiseEvent {
        name: b.simple_name("Changed"),
        arguments: vec![b.arg(b.me()), b.arg(b.ident("e"))],
    });
    let add = b.stmt(StatementKind::AddHandler {
        event: b.member(b.ident("button"), "Click"),
        handler: b.unary(UnaryOperator::AddressOf, b.ident("OnClick")),
    });
    let remove = b.stmt(StatementKind::RemoveHandler {
        event: b.member(b.ident("button"), "Click"),
        handler: b.unary(UnaryOperator::AddressOf, b.ident("OnClick")),
    });
    assert_eq!(
        convert(&[raise, add, remove]),
        "Changed?.Invoke(this, e);\nbutton.Click += OnClick;\nbutton.Click -= OnClick;"
    );
}

#[test]
fn local_declaration_splits_by_type() {
    let b = SyntaxBuilder::new();
    let mut sized = b.modified_identifier("b");
    sized.array_bounds = Some(vec![b.arg(b.int(5))]);
    let statement = b.stmt(StatementKind::LocalDeclaration {
        modifiers: vec![vb::Modifier::Dim],
        declarators: vec![vb::VariableDeclarator {
            names: vec![b.modified_identifier("a"), sized],
            as_clause: Some(vb::AsClause::Simple {
                attributes: Vec::new(),
                ty: b.predefined(PredefinedType::Integer),
            }),
            initializer: None,
        }],
    });
    assert_eq!(convert(&[statement]), "int a;\nint[] b = new int[6];");
}

#[test]
fn static_locals_are_unsupported() {
    let b = SyntaxBuilder::new();
    let statement = b.stmt(StatementKind::LocalDeclaration {
        modifiers: vec![vb::Modifier::Static],
        declarators: vec![b.declarator("count", Some(b.predefined(PredefinedType::Integer)), None)],
    });
    let error = convert_in(&SemanticTable::new(), EnclosingBody::Procedure, false, &[statement]).unwrap_err();
    assert_eq!(error.kind(), "StaticKeyword");
}

#[test]
fn bare_method_name_statement_is_a_call() {
    let b = SyntaxBuilder::new();
    let name = b.ident("Refresh");
    let mut table = SemanticTable::new();
    table.set_symbol(name.id(), Symbol::new("Refresh", SymbolKind::Method));
    let statement = b.expr_stmt(name);
    assert_eq!(
        convert_in(&table, EnclosingBody::Procedure, false, &[statement]).unwrap(),
        "Refresh();"
    );
}

#[test]
fn stop_and_end() {
    let b = SyntaxBuilder::new();
    assert_eq!(
        convert(&[b.stmt(StatementKind::Stop), b.stmt(StatementKind::End)]),
        "System.Diagnostics.Debugger.Break();\nSystem.Environment.Exit(0);"
    );
}

#[test]
fn legacy_statements_are_unimplemented() {
    let b = SyntaxBuilder::new();
    let table = SemanticTable::new();
    for (kind, name) in [
        (StatementKind::OnErrorResumeNext, "OnErrorResumeNextStatement"),
        (
            StatementKind::Label {
                label: "Top".to_string(),
            },
            "LabelStatement",
        ),
        (
            StatementKind::Erase {
                expressions: vec![b.ident("items")],
            },
            "EraseStatement",
        ),
    ] {
        let error = convert_in(&table, EnclosingBody::Procedure, false, &[b.stmt(kind)]).unwrap_err();
        assert_eq!(error, ConversionError::unimplemented(name));
    }
}

#[test]
fn statement_comments_are_carried() {
    let b = SyntaxBuilder::new();
    let statement = b
        .expr_stmt(b.invoke(b.ident("Save"), Vec::new()))
        .with_trivia(vb::Trivia {
            leading: vec!["' persist".to_string()],
            trailing: Some("' now".to_string()),
        });
    assert_eq!(convert(&[statement]), "// persist\nSave(); // now");
}

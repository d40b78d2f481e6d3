//! End-to-end conversion properties, exercised through the public entry
//! points only: build a source tree, convert the unit, print it.

use vbconv_converter::{ConversionError, ConvertOptions, convert_unit};
use vbconv_csharp::CSharpPrinter;
use vbconv_semantic::{SemanticTable, SpecialType, Symbol, SymbolKind, TypeSymbol};
use vbconv_syntax::{
    self as vb, BlockKind, CaseBlock, CaseClause, DeclarationKind, EventDeclaration, ForControl,
    MethodKind, PredefinedCastKeyword, PredefinedType, StatementKind, SyntaxBuilder, UnaryOperator,
    UsingResource,
};

fn print(table: &SemanticTable, unit: &vb::CompilationUnit) -> Result<String, ConversionError> {
    let converted = convert_unit(unit, table, &ConvertOptions::default())?;
    Ok(CSharpPrinter::print_to_string(&converted))
}

/// `Class Widget` holding the given members.
fn in_class(b: &SyntaxBuilder, members: Vec<vb::Declaration>) -> vb::CompilationUnit {
    b.compilation_unit(vec![b.class("Widget", members)])
}

fn sub_body(b: &SyntaxBuilder, body: Vec<vb::Statement>) -> vb::CompilationUnit {
    in_class(b, vec![b.sub("Run", Vec::new(), body)])
}

#[test]
fn conversion_is_deterministic() {
    let b = SyntaxBuilder::new();
    let unit = sub_body(
        &b,
        vec![
            b.dim("total", Some(b.predefined(PredefinedType::Integer)), Some(b.int(0))),
            b.stmt(StatementKind::With {
                expression: b.ident("target"),
                statements: vec![b.expr_stmt(b.invoke(b.implicit_member("Open"), Vec::new()))],
            }),
        ],
    );
    let table = SemanticTable::new();
    let first = print(&table, &unit).unwrap();
    for _ in 0..4 {
        assert_eq!(print(&table, &unit).unwrap(), first);
    }
}

#[test]
fn for_loop_counts_inclusively() {
    let b = SyntaxBuilder::new();
    let unit = sub_body(
        &b,
        vec![b.stmt(StatementKind::For {
            control: ForControl::Variable {
                expression: b.ident("i"),
            },
            from: b.int(1),
            to: b.int(5),
            step: None,
            statements: vec![b.expr_stmt(b.invoke(b.ident("Print"), vec![b.ident("i")]))],
        })],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert!(output.contains("for (var i = 1; i <= 5; i++)"), "{output}");
    assert!(output.contains("Print(i);"), "{output}");
}

#[test]
fn negative_step_flips_the_comparison() {
    let b = SyntaxBuilder::new();
    let unit = sub_body(
        &b,
        vec![b.stmt(StatementKind::For {
            control: ForControl::Variable {
                expression: b.ident("i"),
            },
            from: b.int(10),
            to: b.int(1),
            step: Some(b.unary(UnaryOperator::Minus, b.int(2))),
            statements: Vec::new(),
        })],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert!(output.contains("i >= 1; i += -2"), "{output}");
}

#[test]
fn select_sections_never_fall_through() {
    let b = SyntaxBuilder::new();
    let case = |value: i64, call: &str| CaseBlock {
        clauses: vec![CaseClause::Simple { value: b.int(value) }],
        statements: vec![b.expr_stmt(b.invoke(b.ident(call), Vec::new()))],
        trivia: Default::default(),
    };
    let unit = sub_body(
        &b,
        vec![b.stmt(StatementKind::Select {
            expression: b.ident("code"),
            case_blocks: vec![case(1, "One"), case(2, "Two")],
        })],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert_eq!(output.matches("break;").count(), 2, "{output}");
    assert!(output.contains("One();\n"), "{output}");
}

#[test]
fn with_block_evaluates_target_once() {
    let b = SyntaxBuilder::new();
    let unit = sub_body(
        &b,
        vec![b.stmt(StatementKind::With {
            expression: b.invoke(b.ident("Create"), Vec::new()),
            statements: vec![
                b.expr_stmt(b.invoke(b.implicit_member("Open"), Vec::new())),
                b.expr_stmt(b.invoke(b.implicit_member("Close"), Vec::new())),
            ],
        })],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert_eq!(output.matches("Create()").count(), 1, "{output}");
    assert!(output.contains("var withBlock = Create();"), "{output}");
    assert!(output.contains("withBlock.Close();"), "{output}");
}

#[test]
fn exit_function_returns_the_default() {
    let b = SyntaxBuilder::new();
    let exit = || {
        b.stmt(StatementKind::Exit {
            block: BlockKind::Function,
        })
    };
    let unit = in_class(
        &b,
        vec![
            b.method(MethodKind::Function, "Count", Vec::new(), Some(b.predefined(PredefinedType::Integer)), vec![exit()]),
            b.method(MethodKind::Function, "Name", Vec::new(), Some(b.predefined(PredefinedType::String)), vec![exit()]),
        ],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert!(output.contains("return default(int);"), "{output}");
    assert!(output.contains("return null;"), "{output}");
}

#[test]
fn first_using_resource_is_outermost() {
    let b = SyntaxBuilder::new();
    let resource = |name: &str, ty: &str| {
        b.declarator(name, None, Some(b.new_object(b.named_type(ty), None)))
    };
    let unit = sub_body(
        &b,
        vec![b.stmt(StatementKind::Using {
            resource: UsingResource::Variables {
                declarators: vec![resource("a", "Reader"), resource("b", "Writer")],
            },
            statements: Vec::new(),
        })],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    let outer = output.find("using (var a").or_else(|| output.find("using (Reader a"));
    let inner = output.find("using (var b").or_else(|| output.find("using (Writer b"));
    assert!(outer.is_some() && inner.is_some(), "{output}");
    assert!(outer < inner, "{output}");
}

#[test]
fn event_delegate_follows_its_field() {
    let b = SyntaxBuilder::new();
    let event = b.decl(DeclarationKind::Event(EventDeclaration {
        attributes: Vec::new(),
        modifiers: Vec::new(),
        identifier: "Changed".to_string(),
        parameters: vec![b.param("sender", None)],
        as_type: None,
        accessors: None,
    }));
    let unit = in_class(&b, vec![event, b.sub("Run", Vec::new(), Vec::new())]);
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert!(
        output.contains(
            "    public event ChangedEventHandler Changed;\n    public delegate void ChangedEventHandler(object sender);\n"
        ),
        "{output}"
    );
}

#[test]
fn conversion_keywords_prefer_convert_over_casts() {
    let b = SyntaxBuilder::new();
    let cast = |keyword| vb::Expr::PredefinedCast {
        id: b.next_id(),
        keyword,
        expression: Box::new(b.ident("text")),
    };
    let unit = sub_body(
        &b,
        vec![
            b.dim("n", None, Some(cast(PredefinedCastKeyword::CInt))),
            b.dim("o", None, Some(cast(PredefinedCastKeyword::CObj))),
        ],
    );
    let output = print(&SemanticTable::new(), &unit).unwrap();
    assert!(output.contains("System.Convert.ToInt32(text)"), "{output}");
    assert!(output.contains("(object)text"), "{output}");
}

#[test]
fn unconvertible_constructs_fail_the_unit() {
    let b = SyntaxBuilder::new();
    for (statement, kind) in [
        (
            StatementKind::GoTo {
                label: "Retry".to_string(),
            },
            "GoToStatement",
        ),
        (StatementKind::OnErrorResumeNext, "OnErrorResumeNextStatement"),
        (
            StatementKind::Erase {
                expressions: vec![b.ident("buffer")],
            },
            "EraseStatement",
        ),
    ] {
        let unit = sub_body(&b, vec![b.stmt(statement)]);
        let error = print(&SemanticTable::new(), &unit).unwrap_err();
        assert_eq!(error, ConversionError::unimplemented(kind));
        assert_eq!(error.to_string(), format!("{kind} not implemented!"));
    }
}

#[test]
fn semantic_answers_change_the_output() {
    let b = SyntaxBuilder::new();
    let target = b.ident("values");
    let access = b.invoke(target.clone(), vec![b.int(2)]);
    let mut table = SemanticTable::new();
    table.set_symbol(
        target.id(),
        Symbol::new("values", SymbolKind::Field).with_type(TypeSymbol::array(TypeSymbol::special(SpecialType::Int32))),
    );
    let unit = sub_body(&b, vec![b.dim("x", None, Some(access))]);

    let with_model = print(&table, &unit).unwrap();
    let without_model = print(&SemanticTable::new(), &unit).unwrap();
    assert!(with_model.contains("values[2]"), "{with_model}");
    assert!(without_model.contains("values(2)"), "{without_model}");
}

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat, PatType, ReturnType, Type};

fn formatted_arg_error_msg(arg_name: &str, arg_pos: usize, fn_name: &str) -> String {
    format!(
        "Expected argument {} ('{}') to be f64, for {}",
        arg_pos, arg_name, fn_name
    )
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path.qself.is_none() && type_path.path.is_ident("f64"),
        _ => false,
    }
}

/// Turns `fn name(a: f64, b: f64) -> f64 { .. }` into a builtin callable with an
/// argument slice: `fn name(args: &[f64]) -> Result<f64, EvalError>`.
///
/// The generated function rejects slices of the wrong length with
/// `EvalError::Arity` before binding each argument by position.
#[proc_macro_attribute]
pub fn formulix_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_body = &input.block;
    let name = fn_name.to_string();

    match &input.sig.output {
        ReturnType::Type(_, ty) if is_f64(ty) => {}
        _ => {
            return syn::Error::new_spanned(&input.sig, format!("{} must return f64", name))
                .to_compile_error()
                .into()
        }
    }

    let mut arg_bindings = Vec::new();

    for (i, arg) in input.sig.inputs.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return syn::Error::new_spanned(arg, "builtins cannot take a receiver")
                .to_compile_error()
                .into();
        };

        let arg_name = match **pat {
            Pat::Ident(ref ident) => &ident.ident,
            _ => {
                return syn::Error::new_spanned(pat, "Unsupported pattern")
                    .to_compile_error()
                    .into()
            }
        };

        if !is_f64(ty) {
            let err_msg = formatted_arg_error_msg(&arg_name.to_string(), i, &name);
            return syn::Error::new_spanned(ty, err_msg).to_compile_error().into();
        }

        arg_bindings.push(quote! {
            let #arg_name: f64 = args[#i];
        });
    }

    let args_len = arg_bindings.len();
    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(args: &[f64]) -> ::std::result::Result<f64, crate::error::EvalError> {
            if args.len() != #args_len {
                return ::std::result::Result::Err(crate::error::EvalError::Arity {
                    symbol: #name.to_string(),
                    expected: #args_len,
                    found: args.len(),
                });
            }

            #(#arg_bindings)*

            ::std::result::Result::Ok(#fn_body)
        }
    };

    TokenStream::from(expanded)
}

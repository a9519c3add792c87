use super::schema::{DatasetSchema, OptionalField, PRODUCTS, REGIONS, SALE_CHANNELS};
use std::fmt::Write;

pub const DATA_ASSISTANT_PERSONA: &str =
    "Você é um assistente de dados, que retorna dados formatados corretamente.";

pub fn build_generation_prompt(schema: &DatasetSchema) -> String {
    let mut prompt = String::with_capacity(1024);
    let _ = write!(
        prompt,
        "Gere um JSON de vendas de uma empresa de material de construção\n\
         contendo exatamente {} objetos em uma lista.\n\
         Não inclua explicações, formatações extras ou aspas adicionais.\n\
         O JSON deve seguir o seguinte formato:\n\
         [\n",
        schema.record_count
    );

    prompt.push_str("    {\n");
    prompt.push_str("        \"data\": \"DD-MM-YYYY\",\n");
    let _ = writeln!(prompt, "        \"produto\": \"{}\",", PRODUCTS.join("|"));
    prompt.push_str("        \"quantidade\": inteiro entre 10 e 200,\n");
    prompt.push_str("        \"preco_unitario\": inteiro entre 5 e 50,\n");
    prompt.push_str("        \"margem líquida\": percentual entre 0 e 100,\n");
    if schema.includes(OptionalField::Region) {
        let _ = writeln!(prompt, "        \"região\": \"{}\",", REGIONS.join("|"));
    }
    if schema.includes(OptionalField::SaleChannel) {
        let _ = writeln!(
            prompt,
            "        \"tipo_de_venda\": \"{}\",",
            SALE_CHANNELS.join("|")
        );
    }
    prompt.push_str("        \"valor_total\": quantidade * preco_unitario\n");
    prompt.push_str("    },\n    ...\n]\n");
    prompt.push_str("Para todos os registros, siga as regras definidas acima.\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_states_record_count_and_products() {
        let prompt = build_generation_prompt(&DatasetSchema::default());
        assert!(prompt.contains("exatamente 20 objetos"));
        assert!(prompt.contains("Cimento|Areia|Bloco de Concreto|Tijolo|Reboco"));
        assert!(prompt.contains("\"valor_total\": quantidade * preco_unitario"));
    }

    #[test]
    fn optional_fields_follow_the_schema() {
        let full = build_generation_prompt(&DatasetSchema::default());
        assert!(full.contains("\"região\""));
        assert!(full.contains("\"tipo_de_venda\": \"online|presencial|telefonica\""));

        let bare = build_generation_prompt(&DatasetSchema {
            record_count: 3,
            optional_fields: vec![],
        });
        assert!(bare.contains("exatamente 3 objetos"));
        assert!(!bare.contains("região"));
        assert!(!bare.contains("tipo_de_venda"));
    }
}

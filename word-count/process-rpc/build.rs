fn main() {
    let word_count_service = tonic_build::manual::Service::builder()
        .name("WordCount")
        .package("wordcount")
        .method(
            tonic_build::manual::Method::builder()
                .name("count_words")
                .route_name("CountWords")
                .input_type("crate::rpc::WordCountRequest")
                .output_type("crate::rpc::WordCountReply")
                .codec_path("tonic_prost::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[word_count_service]);
}

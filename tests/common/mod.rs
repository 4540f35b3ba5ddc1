#![allow(dead_code)]

/// Opening of "A Tale of Two Cities" (475 letters once normalized).
pub const DICKENS: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was the spring of \
hope, it was the winter of despair, we had everything before us, we had nothing before us, we \
were all going direct to Heaven, we were all going direct the other way. In short, the period \
was so far like the present period, that some of its noisiest authorities insisted on its being \
received, for good or for evil, in the superlative degree of comparison only.";

/// Plain Portuguese prose (377 letters, no diacritics).
pub const PORTUGUESE: &str = "Era uma vez um menino que morava numa pequena aldeia perto do mar. \
Todos os dias ele acordava cedo para ajudar o pai a preparar o barco de pesca. A mae ficava em \
casa cuidando da horta e dos animais, e a irma mais nova ia para a escola da vila. Quando o sol \
se punha, a familia se reunia em volta da mesa para comer o peixe que o pai tinha trazido do \
mar, e o menino contava historias sobre as ondas, as gaivotas e os outros pescadores que \
encontrava no caminho de volta para casa.";

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `repeats` copies of a block whose ciphertext under the same-length key has no repeated
/// letter, so every repeat distance in the result is a multiple of `key_length` (<= 12).
pub fn periodic_ciphertext(key_length: usize, repeats: usize) -> (String, String) {
    let block = &ALPHABET[..key_length];
    let plaintext = block.repeat(repeats);
    let key = block.to_string();
    let ciphertext = vigenere::encrypt(&plaintext, &key)
        .expect("non-empty key")
        .into_string();
    (ciphertext, key)
}

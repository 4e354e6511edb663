//! English letter-to-sound rules
//!
//! NRL style context rules rewritten for the CMU phoneset. Within each
//! letter the more specific rules come first and the last rule is the
//! default for that letter.

use crate::lexicon::lts::{LetterToSound, RuleLts};
use crate::lexicon::phoneset::{strip_stress, Phoneset};
use crate::Result;
use std::sync::Arc;

pub const ENGLISH_RULES: &str = "
; a
_ [a] _ = ah
_ [are] _ = aa r
_ [ar] o = er
[ar] # = eh r
^ [as] # = ey s
[a] wa = ah
[aw] = ao
_ : [any] = eh n iy
[a] ^ + # = ey
# : [ally] = ah l iy
_ [al] # = ah l
[again] = ah g eh n
# : [ag] e = ih jh
[a] ^ + : # = ae
: [a] ^ + _ = ey
[a] ^ % = ey
_ [arr] = ah r
[arr] = ae r
_ : [ar] _ = aa r
[ar] _ = er
[ar] = aa r
[air] = eh r
[ai] = ey
[ay] = ey
[au] = ao
# : [al] _ = ah l
# : [als] _ = ah l z
[alk] = ao k
[al] ^ = ao l
_ : [able] = ey b ah l
[able] = ah b ah l
[ang] + = ey n jh
[a] = ae

; b
_ [be] ^ # = b ih
[being] = b iy ih ng
_ [both] _ = b ow th
_ [bus] # = b ih z
[buil] = b ih l
[bb] = b
[b] = b

; c
_ [ch] ^ = k
^ e [ch] = k
[ch] = ch
_ s [ci] # = s ay
[ci] a = sh
[ci] o = sh
[ci] en = sh
[c] + = s
[ck] = k
[com] % = k ah m
[cc] + = k s
[cc] = k
[c] = k

; d
# : [ded] _ = d ih d
. e [d] _ = d
# ^ : e [d] _ = t
_ [de] ^ # = d ih
_ [do] _ = d uw
_ [does] = d ah z
_ [doing] = d uw ih ng
_ [dow] = d aw
[du] a = jh uw
[dd] = d
[d] = d

; e
# : [e] _ =
_ : [e] _ = iy
# [ed] _ = d
# : [e] d _ =
[ev] er = eh v
[e] ^ % = iy
[eri] # = iy r iy
[eri] = eh r ih
# : [er] # = er
[er] # = eh r
[er] = er
_ [even] = iy v eh n
# : [e] w =
[ew] = y uw
[e] o = iy
# : s [es] _ = ih z
# : c [es] _ = ih z
# : g [es] _ = ih z
# : z [es] _ = ih z
# : x [es] _ = ih z
# : j [es] _ = ih z
# : ch [es] _ = ih z
# : sh [es] _ = ih z
# : [e] s _ =
# : [ely] _ = l iy
# : [ement] = m eh n t
[eful] = f uh l
[ee] = iy
[earn] = er n
_ [ear] ^ = er
[ead] = eh d
# : [ea] _ = iy ah
[ea] su = eh
[ea] = iy
[eigh] = ey
[ei] = iy
_ [eye] = ay
[ey] = iy
[eu] = y uw
[e] = eh

; f
[ful] = f uh l
[ff] = f
[f] = f

; g
[giv] = g ih v
_ [g] i ^ = g
[ge] t = g eh
su [gges] = g jh eh s
[gg] = g
_ b # [g] = g
[g] + = jh
[great] = g r ey t
# [gh] =
[g] = g

; h
_ [hav] = hh ae v
_ [here] = hh iy r
_ [hour] = aw er
[how] = hh aw
[h] # = hh
[h] =

; i
_ [in] = ih n
_ [i] _ = ay
[in] d = ay n
[ier] = iy er
# : r [ied] = iy d
[ied] _ = ay d
[ien] = iy eh n
[ie] t = ay eh
_ : [i] % = ay
[i] % = iy
[ie] = iy
[i] ^ + : # = ih
[ir] # = ay r
[iz] % = ay z
[is] % = ay z
[i] d % = ay
+ ^ [i] ^ + = ih
[i] t % = ay
# ^ : [i] ^ + = ih
[i] ^ + = ay
[ir] = er
[igh] = ay
[ild] = ay l d
[ign] _ = ay n
[ign] ^ = ay n
[ign] % = ay n
[ique] = iy k
[i] = ih

; j
[j] = jh

; k
_ [k] n =
[k] = k

; l
[lo] c # = l ow
l [l] =
# ^ : [l] % = ah l
[lead] = l iy d
[l] = l

; m
[mov] = m uw v
[mm] = m
[m] = m

; n
e [ng] + = n jh
[ng] r = ng g
[ng] # = ng g
[ngl] % = ng g ah l
[ng] = ng
[nk] = ng k
_ [now] _ = n aw
[nn] = n
[n] = n

; o
[of] _ = ah v
[orough] = er ow
# : [or] _ = er
# : [ors] _ = er z
[or] = ao r
_ [one] = w ah n
[ow] = ow
_ [over] = ow v er
[ov] = ah v
[o] ^ % = ow
[o] ^ en = ow
[o] ^ i # = ow
[ol] d = ow l
[ought] = ao t
[ough] = ah f
_ [ou] = aw
h [ou] s # = aw
[ous] = ah s
[our] = ao r
[ould] = uh d
^ [ou] ^ l = ah
[oup] = uw p
[ou] = aw
[oy] = oy
[oing] = ow ih ng
[oi] = oy
[oor] = ao r
[ook] = uh k
[ood] = uh d
[oo] = uw
[o] e = ow
[o] _ = ow
[oa] = ow
_ [only] = ow n l iy
_ [once] = w ah n s
c [o] n = aa
[o] ng = ao
_ : ^ [o] n = ah
i [on] = ah n
# : [on] _ = ah n
# ^ [on] = ah n
[o] st _ = ow
[of] ^ = ao f
[other] = ah dh er
[oss] _ = ao s
# : ^ [om] = ah m
[o] = aa

; p
[ph] = f
[peop] = p iy p
[pow] = p aw
[put] _ = p uh t
[pp] = p
[p] = p

; q
[quar] = k w ao r
[qu] = k w
[q] = k

; r
_ [re] ^ # = r iy
[rr] = r
[r] = r

; s
[sh] = sh
# [sion] = zh ah n
[some] = s ah m
# [sur] # = zh er
[sur] # = sh er
# [su] # = zh uw
# [ssu] # = sh uw
# [sed] _ = z d
# [s] # = z
[said] = s eh d
^ [sion] = sh ah n
[s] s =
. [s] _ = z
# : . e [s] _ = z
u [s] _ = s
_ : # [s] _ = z
_ [sch] = s k
[s] c + =
# [sm] = z m
[s] = s

; t
_ [the] _ = dh ah
[to] _ = t uw
[that] _ = dh ae t
_ [this] _ = dh ih s
_ [they] = dh ey
_ [there] = dh eh r
[ther] = dh er
[their] = dh eh r
_ [than] _ = dh ae n
_ [them] _ = dh eh m
[these] _ = dh iy z
_ [then] = dh eh n
[through] = th r uw
[those] = dh ow z
[though] _ = dh ow
_ [thus] = dh ah s
[th] = th
# : [ted] _ = t ih d
s [ti] # n = ch
[ti] o = sh
[ti] a = sh
[tien] = sh ah n
[tur] # = ch er
[tu] a = ch uw
_ [two] = t uw
[t] ch =
[tt] = t
[t] = t

; u
_ [un] i = y uw n
_ [un] = ah n
_ [upon] = ah p ao n
t [ur] # = uh r
s [ur] # = uh r
r [ur] # = uh r
d [ur] # = uh r
l [ur] # = uh r
z [ur] # = uh r
n [ur] # = uh r
j [ur] # = uh r
th [ur] # = uh r
ch [ur] # = uh r
sh [ur] # = uh r
[ur] # = y uh r
[ur] = er
[u] ^ _ = ah
[u] ^ ^ = ah
[uy] = ay
_ g [u] # =
g [u] % =
g [u] # = w
# n [u] = y uw
t [u] = uw
s [u] = uw
r [u] = uw
d [u] = uw
l [u] = uw
z [u] = uw
n [u] = uw
j [u] = uw
th [u] = uw
ch [u] = uw
sh [u] = uw
[u] = y uw

; v
[view] = v y uw
[v] = v

; w
_ [were] = w er
[wa] s = w aa
[wa] t = w aa
[where] = w eh r
[what] = w ah t
[whol] = hh ow l
[who] = hh uw
[wh] = w
[war] = w ao r
[wor] ^ = w er
[wr] = r
[w] = w

; x
[x] = k s

; y
[young] = y ah ng
_ [you] = y uw
_ [yes] = y eh s
_ [y] = y
# ^ : [y] _ = iy
# ^ : [y] i = iy
_ : [y] _ = ay
_ : [y] # = ay
_ : [y] ^ + : # = ih
_ : [y] ^ # = ay
[y] = ih

; z
[zz] = z
[z] = z
";

/// English letter to sound: context rules plus default stress
///
/// Rule output carries no stress; the first vowel gets primary stress and
/// the rest are unstressed.
pub struct EnglishLts {
    rules: RuleLts,
    phoneset: Arc<Phoneset>,
}

impl EnglishLts {
    pub fn new(phoneset: Arc<Phoneset>) -> Result<Self> {
        Ok(Self {
            rules: RuleLts::from_rules("cmu", ENGLISH_RULES)?,
            phoneset,
        })
    }
}

impl LetterToSound for EnglishLts {
    fn predict(&self, word: &str) -> Result<Vec<String>> {
        let phones = self.rules.predict(word)?;
        let mut stressed = false;
        Ok(phones
            .into_iter()
            .map(|p| {
                let (base, digit) = strip_stress(&p);
                if digit.is_some() || !self.phoneset.is_vowel(base) {
                    return p;
                }
                let mark = if stressed { '0' } else { '1' };
                stressed = true;
                format!("{}{}", base, mark)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::cmulex::cmu_phoneset;

    fn lts() -> EnglishLts {
        EnglishLts::new(Arc::new(cmu_phoneset())).unwrap()
    }

    fn said(word: &str) -> String {
        lts().predict(word).unwrap().join(" ")
    }

    #[test]
    fn test_rules_parse() {
        let rules = RuleLts::from_rules("cmu", ENGLISH_RULES).unwrap();
        assert!(rules.rule_count() > 250);
    }

    #[test]
    fn test_common_patterns() {
        assert_eq!(said("cat"), "k ae1 t");
        assert_eq!(said("ship"), "sh ih1 p");
        assert_eq!(said("phone"), "f ow1 n");
        assert_eq!(said("make"), "m ey1 k");
        assert_eq!(said("nation"), "n ey1 sh ah0 n");
    }

    #[test]
    fn test_every_letter_has_a_default() {
        let l = lts();
        for c in 'a'..='z' {
            assert!(l.predict(&c.to_string()).is_ok(), "letter {} failed", c);
        }
    }

    #[test]
    fn test_output_in_phoneset() {
        let ps = cmu_phoneset();
        let l = lts();
        for word in ["through", "quickly", "wrought", "xylophone", "judge", "yearly"] {
            let phones = l.predict(word).unwrap();
            assert!(ps.validate(&phones).is_ok(), "{} -> {:?}", word, phones);
        }
    }
}
